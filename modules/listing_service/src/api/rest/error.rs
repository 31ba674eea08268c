//! HTTP error mapping to `{"error": ...}` bodies

use crate::contract::ListingError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error response body
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "\"address\" is a required property")]
    pub error: String,
}

/// An error response ready to be returned from a handler
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
            },
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.body.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Map domain errors to HTTP responses.
///
/// Store failures, not-found on read included, are all 500.
pub fn map_domain_error(error: ListingError) -> ApiError {
    let status = if error.is_bad_request() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    ApiError::new(status, error.to_string())
}

impl From<ListingError> for ApiError {
    fn from(error: ListingError) -> Self {
        map_domain_error(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_binding_errors_are_bad_requests() {
        let errors = [
            ListingError::validation("\"city\" is a required property"),
            ListingError::InvalidId {
                id: "abc".to_string(),
                reason: "bad hex".to_string(),
            },
            ListingError::InvalidFilter {
                param: "beds_min".to_string(),
                value: "x".to_string(),
            },
        ];
        for error in errors {
            assert_eq!(map_domain_error(error).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_store_errors_are_internal() {
        let errors = [
            ListingError::NotFound {
                id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            },
            ListingError::Timeout {
                operation: "find",
                timeout: Duration::from_secs(10),
            },
            ListingError::internal("connection refused"),
        ];
        for error in errors {
            assert_eq!(
                map_domain_error(error).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_raw_message_is_preserved() {
        let api = map_domain_error(ListingError::internal("connection refused"));
        assert_eq!(api.message(), "connection refused");
    }
}
