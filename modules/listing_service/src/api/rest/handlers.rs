//! HTTP request handlers - binding and validation, then delegation to the domain service

use super::{
    dto::*,
    error::{map_domain_error, ApiError},
};
use crate::contract::{ListingError, ListingFields, ListingId};
use crate::domain::{build_filter, FilterParams, ListingValidator, Service};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};
use serde_json::Value;
use std::sync::Arc;

/// Decode and validate a create/update body.
///
/// Syntax errors, schema violations and type mismatches all become 400s.
/// A `null` field decodes as its zero value.
pub fn bind_listing(
    validator: &ListingValidator,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ListingFields, ApiError> {
    let Json(mut value) = payload?;
    validator.validate(&value)?;
    if let Value::Object(map) = &mut value {
        map.retain(|_, v| !v.is_null());
    }
    let payload: ListingPayload = serde_json::from_value(value)
        .map_err(|e| map_domain_error(ListingError::validation(e.to_string())))?;
    Ok(payload.into())
}

/// Parse a path identifier, rejecting anything that is not a store id
pub fn bind_id(path: Result<Path<String>, PathRejection>) -> Result<ListingId, ApiError> {
    let Path(raw) = path?;
    Ok(ListingId::parse(&raw)?)
}

/// Create a listing
pub async fn create_listing(
    service: Arc<Service>,
    validator: Arc<ListingValidator>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let fields = bind_listing(&validator, payload)?;
    let ack = service.create(fields).await?;

    Ok(Json(CreatedResponse {
        message: "Real estate created successfully".to_string(),
        result: ack.into(),
    }))
}

/// Get a listing by id
pub async fn get_listing(
    service: Arc<Service>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ListingResponse>, ApiError> {
    let id = bind_id(path)?;
    let listing = service.get(id).await?;

    Ok(Json(ListingResponse {
        message: "Real estate found successfully".to_string(),
        result: listing.into(),
    }))
}

/// Replace a listing's fields
pub async fn update_listing(
    service: Arc<Service>,
    validator: Arc<ListingValidator>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let fields = bind_listing(&validator, payload)?;
    let id = bind_id(path)?;
    let ack = service.update(id, fields).await?;

    Ok(Json(UpdatedResponse {
        message: "Real estate updated successfully".to_string(),
        result: ack.into(),
    }))
}

/// Delete a listing
pub async fn delete_listing(
    service: Arc<Service>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = bind_id(path)?;
    let ack = service.delete(id).await?;

    Ok(Json(DeletedResponse {
        message: "Real estate deleted successfully".to_string(),
        result: ack.into(),
    }))
}

/// List listings matching the query filters
pub async fn list_listings(
    service: Arc<Service>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListingsResponse>, ApiError> {
    let Query(pairs) = query?;
    let query: ListFilterQuery = pairs.into_iter().collect();
    let filter = build_filter(&FilterParams::from(query))?;
    let scan = service.list(&filter).await?;

    Ok(Json(ListingsResponse {
        message: "Real estate info retrieved successfully".to_string(),
        result: scan.listings.into_iter().map(Into::into).collect(),
        skipped: scan.skipped,
    }))
}
