//! API error handling
//!
//! Every handler failure funnels through `ApiError`, which owns the mapping
//! from domain error kinds to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stockroom_domain::product::ProductError;
use thiserror::Error;
use tracing::error;

use crate::dto::product::ErrorResponse;

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        if err.is_client_error() {
            return Self::BadRequest(err.to_string());
        }

        match err {
            ProductError::ProductNotFound(_) => Self::NotFound(err.to_string()),
            ProductError::Internal(msg) => Self::Internal(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            // Detail stays in the logs; clients only see the generic message
            error!(detail = %detail, "Request failed with internal error");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_domain::product::ProductId;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        for err in [
            ProductError::FieldsEmpty,
            ProductError::invalid_expiration("99/99/9999"),
            ProductError::repeated_code("W1"),
        ] {
            let api: ApiError = err.clone().into();
            assert_eq!(api.status(), StatusCode::BAD_REQUEST);
            assert_eq!(api.to_string(), err.to_string());
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let api: ApiError = ProductError::ProductNotFound(ProductId::new(3)).into();
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert_eq!(api.to_string(), "product 3 not found");
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let api: ApiError = ProductError::internal("product table lock poisoned").into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.to_string(), "internal server error");
    }
}
