//! Domain errors for catalog operations
//!
//! These are the failure categories surfaced to callers of the service and
//! repository. None of them is fatal to the process: each one rejects the
//! single request that caused it.

use thiserror::Error;

use crate::product::ids::ProductId;

/// Errors that can occur while validating or storing products
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    /// One or more required fields hold their zero/empty value
    #[error("fields cannot be empty")]
    FieldsEmpty,

    /// The expiration is not a `DD/MM/YYYY` calendar date
    #[error("expiration must be a valid date: {0}")]
    InvalidExpiration(String),

    /// Another stored product already uses this code value
    #[error("code value must be unique: {0}")]
    RepeatedCode(String),

    /// No product is stored under this id
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The store itself is unusable
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProductError {
    /// Create an invalid expiration error for the offending value
    pub fn invalid_expiration(value: impl Into<String>) -> Self {
        Self::InvalidExpiration(value.into())
    }

    /// Create a repeated code error for the duplicated code value
    pub fn repeated_code(code: impl Into<String>) -> Self {
        Self::RepeatedCode(code.into())
    }

    /// Create an internal error with a message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the error rejects the caller's input rather than the store state
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::FieldsEmpty | Self::InvalidExpiration(_) | Self::RepeatedCode(_)
        )
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, ProductError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_empty_error() {
        let err = ProductError::FieldsEmpty;
        assert_eq!(err.to_string(), "fields cannot be empty");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_repeated_code_error() {
        let err = ProductError::repeated_code("W1");
        assert!(matches!(err, ProductError::RepeatedCode(_)));
        assert_eq!(err.to_string(), "code value must be unique: W1");
    }

    #[test]
    fn test_not_found_error() {
        let err = ProductError::ProductNotFound(ProductId::new(9));
        assert_eq!(err.to_string(), "product 9 not found");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_internal_error() {
        let err = ProductError::internal("lock poisoned");
        assert!(err.to_string().contains("lock poisoned"));
        assert!(!err.is_client_error());
    }
}
