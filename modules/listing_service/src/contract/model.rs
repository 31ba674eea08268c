//! Contract models for the listing service
//!
//! These models are transport-agnostic. Wire and storage shapes live in
//! `api::rest::dto` and `infra::storage::entity` respectively.

use super::error::ListingError;
use mongodb::bson::oid::ObjectId;
use std::fmt;

/// Store-native listing identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListingId(ObjectId);

impl ListingId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parse a 24-character hex identifier
    pub fn parse(raw: &str) -> Result<Self, ListingError> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|e| ListingError::InvalidId {
                id: raw.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for ListingId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for ListingId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Mutable field set of a listing.
///
/// Absent values are the zero value: create and update both write the whole
/// set, so a field omitted from an update reads back as zero or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFields {
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

/// A persisted listing
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub fields: ListingFields,
}

/// Acknowledgment of an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertAck {
    pub inserted_id: ListingId,
}

/// Acknowledgment of an update-by-id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Acknowledgment of a delete-by-id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteAck {
    pub deleted_count: u64,
}

/// Result of a filtered scan.
///
/// `skipped` counts stored documents that matched the predicate but could not
/// be decoded into a listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingScan {
    pub listings: Vec<Listing>,
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_id_parse_roundtrips_hex() {
        let id = ListingId::parse("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[test]
    fn test_listing_id_parse_rejects_garbage() {
        for raw in ["", "not-an-id", "65a1f0c2e4b0a1b2c3d4e5f", "zza1f0c2e4b0a1b2c3d4e5f6"] {
            let err = ListingId::parse(raw).unwrap_err();
            assert!(matches!(err, ListingError::InvalidId { .. }), "{raw}");
        }
    }
}
