//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ===== Listing DTOs =====

/// Create/update request body.
///
/// Every field is optional on the wire; omitted fields take their zero
/// value. Required-field checks run against the raw JSON before this
/// struct is decoded. Unknown keys, including `_id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ListingPayload {
    #[schema(example = 250000.0, minimum = 0)]
    pub market_price: f64,

    #[schema(example = "1 Main St")]
    pub address: String,

    #[schema(example = "62701")]
    pub zip_code: String,

    #[schema(example = "Springfield")]
    pub city: String,

    #[schema(example = "IL")]
    pub state: String,

    #[schema(example = 3)]
    pub beds: u32,

    #[schema(example = 2)]
    pub baths: u32,

    #[schema(example = 1500)]
    pub sqft: u32,

    #[schema(example = 1999)]
    pub year_built: u32,
}

/// Listing response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    /// Store identifier (24-character hex)
    #[serde(rename = "_id")]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub market_price: f64,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub state: String,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub year_built: u32,
}

// ===== Acknowledgment DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InsertAckDto {
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub inserted_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAckDto {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteAckDto {
    pub deleted_count: u64,
}

// ===== Response envelopes =====

/// Response to POST /real_estate_info
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "Real estate created successfully")]
    pub message: String,
    pub result: InsertAckDto,
}

/// Response to GET /real_estate_info/{id}
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListingResponse {
    #[schema(example = "Real estate found successfully")]
    pub message: String,
    pub result: ListingDto,
}

/// Response to PUT /real_estate_info/{id}
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdatedResponse {
    #[schema(example = "Real estate updated successfully")]
    pub message: String,
    pub result: UpdateAckDto,
}

/// Response to DELETE /real_estate_info/{id}
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "Real estate deleted successfully")]
    pub message: String,
    pub result: DeleteAckDto,
}

/// Response to GET /real_estate_info
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListingsResponse {
    #[schema(example = "Real estate info retrieved successfully")]
    pub message: String,
    pub result: Vec<ListingDto>,

    /// Stored documents matching the filter that could not be decoded
    #[serde(skip_serializing_if = "is_zero")]
    pub skipped: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

// ===== Query DTOs =====

/// Filter parameters for the list endpoint.
///
/// A range applies only when both of its bounds are given. When a key is
/// repeated the first value is used; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFilterQuery {
    pub market_price_min: Option<String>,
    pub market_price_max: Option<String>,
    pub beds_min: Option<String>,
    pub beds_max: Option<String>,
    pub baths_min: Option<String>,
    pub baths_max: Option<String>,
    pub sqft_min: Option<String>,
    pub sqft_max: Option<String>,
    pub year_built_min: Option<String>,
    pub year_built_max: Option<String>,
    /// Comma-separated exact state values, e.g. `CA,NY`
    pub states: Option<String>,
    /// Comma-separated exact city values
    pub cities: Option<String>,
}
