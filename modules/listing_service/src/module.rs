//! Module wiring
//!
//! Builds the store gateway and the payload validator once and hands them to
//! the router, so no handler reaches for process-wide state.

use crate::config::Config;
use crate::domain::{ListingRepository, ListingValidator, Service};
use crate::infra::storage::MongoListingRepository;
use anyhow::Result;
use axum::Router;
use mongodb::Database;
use std::sync::Arc;

/// Listing service module
pub struct ListingServiceModule {
    service: Arc<Service>,
    validator: Arc<ListingValidator>,
}

impl ListingServiceModule {
    /// Wire the module against a MongoDB database
    pub fn init(config: Config, db: &Database) -> Result<Self> {
        let repo = Arc::new(MongoListingRepository::new(db, &config.collection));
        tracing::info!(
            database = db.name(),
            collection = %config.collection,
            "Listing repository bound to MongoDB collection"
        );
        Self::with_repository(config, repo)
    }

    /// Wire the module against any repository implementation
    pub fn with_repository(config: Config, repo: Arc<dyn ListingRepository>) -> Result<Self> {
        let validator = Arc::new(ListingValidator::new(config.required_fields.as_slice())?);
        let service = Arc::new(Service::new(repo, config.store_timeout));

        tracing::info!(
            store_timeout = ?config.store_timeout,
            required_fields = ?validator.required_fields(),
            "Listing service initialized"
        );

        Ok(Self { service, validator })
    }

    /// Mount the REST routes onto a router
    pub fn register_rest(&self, router: Router) -> Router {
        tracing::info!("Registering listing service REST routes");
        crate::api::rest::routes::register_routes(
            router,
            self.service.clone(),
            self.validator.clone(),
        )
    }
}
