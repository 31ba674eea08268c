//! Contract layer - transport-agnostic models and errors
//!
//! Models here carry no serde derives; the REST DTOs and the storage
//! entity each own their wire representation.

pub mod error;
pub mod model;

pub use error::ListingError;
pub use model::{
    DeleteAck, InsertAck, Listing, ListingFields, ListingId, ListingScan, UpdateAck,
};
