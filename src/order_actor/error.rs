//! Error types for the order store.

use thiserror::Error;

use crate::framework::StoreError;

/// Errors that can occur during order store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid, or the requested status change
    /// is not allowed.
    #[error("Invalid order: {0}")]
    Invalid(String),

    /// The order store could not be reached or rejected the request.
    #[error("Order store error: {0}")]
    Store(String),
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            StoreError::Rejected(msg) => OrderError::Invalid(msg),
            other => OrderError::Store(other.to_string()),
        }
    }
}
