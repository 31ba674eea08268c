//! Domain service - the store gateway
//!
//! Each operation issues exactly one repository call, bounded by the
//! configured store timeout. No retries.

use super::filter::ListingFilter;
use super::repository::ListingRepository;
use crate::contract::{
    DeleteAck, InsertAck, Listing, ListingError, ListingFields, ListingId, ListingScan, UpdateAck,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Domain service for listing management
pub struct Service {
    repo: Arc<dyn ListingRepository>,
    store_timeout: Duration,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn ListingRepository>, store_timeout: Duration) -> Self {
        Self {
            repo,
            store_timeout,
        }
    }

    /// Insert a new listing
    pub async fn create(&self, fields: ListingFields) -> Result<InsertAck, ListingError> {
        let inserted_id = self.bounded("insert", self.repo.insert(&fields)).await?;
        tracing::info!(listing_id = %inserted_id, "Listing created");
        Ok(InsertAck { inserted_id })
    }

    /// Get a listing by id
    pub async fn get(&self, id: ListingId) -> Result<Listing, ListingError> {
        self.bounded("find_by_id", self.repo.find_by_id(id))
            .await?
            .ok_or_else(|| ListingError::NotFound { id: id.to_string() })
    }

    /// Replace the mutable field set of a listing
    pub async fn update(
        &self,
        id: ListingId,
        fields: ListingFields,
    ) -> Result<UpdateAck, ListingError> {
        let ack = self
            .bounded("update_by_id", self.repo.update_by_id(id, &fields))
            .await?;
        tracing::info!(
            listing_id = %id,
            matched = ack.matched_count,
            modified = ack.modified_count,
            "Listing updated"
        );
        Ok(ack)
    }

    /// Delete a listing
    pub async fn delete(&self, id: ListingId) -> Result<DeleteAck, ListingError> {
        let ack = self.bounded("delete_by_id", self.repo.delete_by_id(id)).await?;
        tracing::info!(listing_id = %id, deleted = ack.deleted_count, "Listing deleted");
        Ok(ack)
    }

    /// List all listings matching a filter
    pub async fn list(&self, filter: &ListingFilter) -> Result<ListingScan, ListingError> {
        let scan = self.bounded("find", self.repo.find(filter)).await?;
        if scan.skipped > 0 {
            tracing::warn!(
                skipped = scan.skipped,
                returned = scan.listings.len(),
                "Skipped stored documents that could not be decoded as listings"
            );
        }
        Ok(scan)
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, ListingError>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        tracing::debug!(operation, "Issuing store operation");
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                let message = format!("{e:#}");
                tracing::error!(operation, error = %message, "Store operation failed");
                Err(ListingError::internal(message))
            }
            Err(_) => {
                tracing::error!(operation, timeout = ?self.store_timeout, "Store operation timed out");
                Err(ListingError::Timeout {
                    operation,
                    timeout: self.store_timeout,
                })
            }
        }
    }
}
