//! Listing Service Module
//!
//! CRUD and filtered search over real-estate listings stored in a MongoDB
//! collection. Requests flow through binding and validation, then the
//! filter builder (list only), then a single bounded store operation.

// Public exports
pub mod contract;
pub use contract::{
    DeleteAck, InsertAck, Listing, ListingError, ListingFields, ListingId, ListingScan, UpdateAck,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::ListingServiceModule;

pub mod domain;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod infra;
