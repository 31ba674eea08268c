//! Contract error types for the listing service

use std::time::Duration;
use thiserror::Error;

/// Listing service errors
///
/// The first three variants are caller mistakes detected before any store
/// access. The rest come from the store gateway.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListingError {
    /// Payload could not be decoded or failed required-field validation
    #[error("{message}")]
    Validation { message: String },

    /// Path identifier is not a valid store id
    #[error("invalid listing id '{id}': {reason}")]
    InvalidId { id: String, reason: String },

    /// A range bound on the list endpoint is not a number of the field's type
    #[error("invalid value '{value}' for query parameter '{param}'")]
    InvalidFilter { param: String, value: String },

    /// No document matched a read-by-id
    #[error("no listing found with id {id}")]
    NotFound { id: String },

    /// The store call did not complete within the configured deadline
    #[error("store operation '{operation}' timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// Any other store-level failure
    #[error("{message}")]
    Internal { message: String },
}

impl ListingError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for errors raised by binding and validation, before the store is reached
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::InvalidId { .. } | Self::InvalidFilter { .. }
        )
    }
}
