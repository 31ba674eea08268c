//! Common test utilities: in-memory and fault-injecting repositories, fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use listing_service::contract::{
    DeleteAck, Listing, ListingFields, ListingId, ListingScan, UpdateAck,
};
use listing_service::domain::{ListingFilter, ListingRepository};
use listing_service::{Config, ListingServiceModule};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// In-memory repository keeping insertion order as the natural scan order
#[derive(Clone, Default)]
pub struct InMemoryListingRepo {
    data: Arc<RwLock<Vec<Listing>>>,
    /// Documents the scan pretends it could not decode
    undecodable: Arc<RwLock<usize>>,
}

impl InMemoryListingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    pub fn snapshot(&self) -> Vec<Listing> {
        self.data.read().clone()
    }

    pub fn add_undecodable(&self, n: usize) {
        *self.undecodable.write() += n;
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepo {
    async fn insert(&self, fields: &ListingFields) -> anyhow::Result<ListingId> {
        let id = ListingId::new();
        self.data.write().push(Listing {
            id,
            fields: fields.clone(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: ListingId) -> anyhow::Result<Option<Listing>> {
        Ok(self.data.read().iter().find(|l| l.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ListingId,
        fields: &ListingFields,
    ) -> anyhow::Result<UpdateAck> {
        let mut data = self.data.write();
        match data.iter_mut().find(|l| l.id == id) {
            Some(listing) => {
                let modified = listing.fields != *fields;
                listing.fields = fields.clone();
                Ok(UpdateAck {
                    matched_count: 1,
                    modified_count: u64::from(modified),
                })
            }
            None => Ok(UpdateAck::default()),
        }
    }

    async fn delete_by_id(&self, id: ListingId) -> anyhow::Result<DeleteAck> {
        let mut data = self.data.write();
        let before = data.len();
        data.retain(|l| l.id != id);
        Ok(DeleteAck {
            deleted_count: (before - data.len()) as u64,
        })
    }

    async fn find(&self, filter: &ListingFilter) -> anyhow::Result<ListingScan> {
        let listings = self
            .data
            .read()
            .iter()
            .filter(|l| filter.matches(&l.fields))
            .cloned()
            .collect();
        Ok(ListingScan {
            listings,
            skipped: *self.undecodable.read(),
        })
    }
}

/// Repository whose every call fails like an unreachable store
pub struct FailingRepo;

#[async_trait]
impl ListingRepository for FailingRepo {
    async fn insert(&self, _fields: &ListingFields) -> anyhow::Result<ListingId> {
        anyhow::bail!("server selection timeout: no available servers")
    }

    async fn find_by_id(&self, _id: ListingId) -> anyhow::Result<Option<Listing>> {
        anyhow::bail!("server selection timeout: no available servers")
    }

    async fn update_by_id(
        &self,
        _id: ListingId,
        _fields: &ListingFields,
    ) -> anyhow::Result<UpdateAck> {
        anyhow::bail!("server selection timeout: no available servers")
    }

    async fn delete_by_id(&self, _id: ListingId) -> anyhow::Result<DeleteAck> {
        anyhow::bail!("server selection timeout: no available servers")
    }

    async fn find(&self, _filter: &ListingFilter) -> anyhow::Result<ListingScan> {
        anyhow::bail!("server selection timeout: no available servers")
    }
}

/// Repository that delays every call before delegating to an in-memory store
pub struct SlowRepo {
    pub inner: InMemoryListingRepo,
    pub delay: Duration,
}

#[async_trait]
impl ListingRepository for SlowRepo {
    async fn insert(&self, fields: &ListingFields) -> anyhow::Result<ListingId> {
        tokio::time::sleep(self.delay).await;
        self.inner.insert(fields).await
    }

    async fn find_by_id(&self, id: ListingId) -> anyhow::Result<Option<Listing>> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_by_id(id).await
    }

    async fn update_by_id(
        &self,
        id: ListingId,
        fields: &ListingFields,
    ) -> anyhow::Result<UpdateAck> {
        tokio::time::sleep(self.delay).await;
        self.inner.update_by_id(id, fields).await
    }

    async fn delete_by_id(&self, id: ListingId) -> anyhow::Result<DeleteAck> {
        tokio::time::sleep(self.delay).await;
        self.inner.delete_by_id(id).await
    }

    async fn find(&self, filter: &ListingFilter) -> anyhow::Result<ListingScan> {
        tokio::time::sleep(self.delay).await;
        self.inner.find(filter).await
    }
}

/// Listing from the end-to-end scenario
pub fn springfield_listing() -> ListingFields {
    ListingFields {
        market_price: 250_000.0,
        address: "1 Main St".to_string(),
        zip_code: String::new(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        beds: 3,
        baths: 2,
        sqft: 1500,
        year_built: 1999,
    }
}

pub fn listing(city: &str, state: &str, beds: u32, market_price: f64) -> ListingFields {
    ListingFields {
        address: format!("{} {} Ave", beds, city),
        city: city.to_string(),
        state: state.to_string(),
        beds,
        baths: 1,
        sqft: 1000 + beds * 250,
        year_built: 1980 + beds,
        market_price,
        ..Default::default()
    }
}

/// Router wired against the given repository with default configuration
pub fn router_with(repo: Arc<dyn ListingRepository>) -> axum::Router {
    let module = ListingServiceModule::with_repository(Config::default(), repo)
        .expect("default config wires");
    module.register_rest(axum::Router::new())
}
