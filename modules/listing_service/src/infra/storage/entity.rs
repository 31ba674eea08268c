//! Document shape of a listing in the `real_estate` collection

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored listing document.
///
/// Missing fields decode as their zero value, matching how updates write
/// the full field set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingDocument {
    /// Store-assigned identifier; left unset on insert so the driver generates one
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

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
