//! Repository trait for data access
//!
//! The document store implementation lives in `infra/storage/repositories.rs`.
//! Every method maps to exactly one store operation.

use super::filter::ListingFilter;
use crate::contract::{DeleteAck, Listing, ListingFields, ListingId, ListingScan, UpdateAck};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for listings
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Insert a new document and return the identifier the store assigned
    async fn insert(&self, fields: &ListingFields) -> Result<ListingId>;

    /// Find a listing by identifier
    async fn find_by_id(&self, id: ListingId) -> Result<Option<Listing>>;

    /// Overwrite every mutable field of the matching document.
    ///
    /// A missing document is reported through a zero `matched_count`.
    async fn update_by_id(&self, id: ListingId, fields: &ListingFields) -> Result<UpdateAck>;

    /// Remove the matching document
    async fn delete_by_id(&self, id: ListingId) -> Result<DeleteAck>;

    /// Scan all documents matching the filter in the store's natural order
    async fn find(&self, filter: &ListingFilter) -> Result<ListingScan>;
}
