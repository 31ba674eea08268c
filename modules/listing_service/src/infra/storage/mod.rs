//! Storage layer - MongoDB document entity and repository

pub mod entity;
pub mod filter;
pub mod mapper;
pub mod repositories;

pub use repositories::MongoListingRepository;
