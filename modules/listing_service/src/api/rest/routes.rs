//! Route registration with utoipa path annotations for OpenAPI documentation

use super::{
    dto::*,
    error::{ApiError, ErrorBody},
    handlers,
    openapi::ApiDoc,
};
use crate::domain::{ListingValidator, Service};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    routing::get,
    Extension, Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Register the listing endpoints and the OpenAPI document
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    validator: Arc<ListingValidator>,
) -> Router {
    router
        .route(
            "/real_estate_info",
            get(list_listings_handler).post(create_listing_handler),
        )
        .route(
            "/real_estate_info/{id}",
            get(get_listing_handler)
                .put(update_listing_handler)
                .delete(delete_listing_handler),
        )
        .route("/api-docs/openapi.json", get(openapi_handler))
        .layer(Extension(service))
        .layer(Extension(validator))
        .layer(TraceLayer::new_for_http())
}

// ===== Handler wrappers that extract dependencies from Extension =====

#[utoipa::path(
    post,
    path = "/real_estate_info",
    tag = "listings",
    request_body = ListingPayload,
    responses(
        (status = 200, description = "Listing created", body = CreatedResponse),
        (status = 400, description = "Malformed or invalid payload", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn create_listing_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(validator): Extension<Arc<ListingValidator>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    handlers::create_listing(service, validator, payload).await
}

#[utoipa::path(
    get,
    path = "/real_estate_info/{id}",
    tag = "listings",
    params(("id" = String, Path, description = "Listing identifier (24-character hex)")),
    responses(
        (status = 200, description = "Listing found", body = ListingResponse),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "Not found or store failure", body = ErrorBody),
    )
)]
pub async fn get_listing_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ListingResponse>, ApiError> {
    handlers::get_listing(service, path).await
}

#[utoipa::path(
    put,
    path = "/real_estate_info/{id}",
    tag = "listings",
    params(("id" = String, Path, description = "Listing identifier (24-character hex)")),
    request_body = ListingPayload,
    responses(
        (status = 200, description = "Update applied; zero counts when nothing matched", body = UpdatedResponse),
        (status = 400, description = "Malformed identifier or payload", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn update_listing_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(validator): Extension<Arc<ListingValidator>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    handlers::update_listing(service, validator, path, payload).await
}

#[utoipa::path(
    delete,
    path = "/real_estate_info/{id}",
    tag = "listings",
    params(("id" = String, Path, description = "Listing identifier (24-character hex)")),
    responses(
        (status = 200, description = "Delete applied; zero count when nothing matched", body = DeletedResponse),
        (status = 400, description = "Malformed identifier", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn delete_listing_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    handlers::delete_listing(service, path).await
}

#[utoipa::path(
    get,
    path = "/real_estate_info",
    tag = "listings",
    params(ListFilterQuery),
    responses(
        (status = 200, description = "Matching listings", body = ListingsResponse),
        (status = 400, description = "Non-numeric range bound", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    )
)]
pub async fn list_listings_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListingsResponse>, ApiError> {
    handlers::list_listings(service, query).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
