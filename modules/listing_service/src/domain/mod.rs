//! Domain layer - filter builder, validation and the store gateway service

pub mod filter;
pub mod repository;
pub mod service;
pub mod validation;

pub use filter::{build_filter, FilterParams, ListingFilter, RangeBound};
pub use repository::ListingRepository;
pub use service::Service;
pub use validation::ListingValidator;
