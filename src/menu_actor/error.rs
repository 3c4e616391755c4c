//! Error types for the menu store.

use thiserror::Error;

use crate::framework::StoreError;

/// Errors that can occur during menu catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The menu item data provided is invalid.
    #[error("Invalid menu item: {0}")]
    Invalid(String),

    /// The menu store could not be reached or rejected the request.
    #[error("Menu store error: {0}")]
    Store(String),
}

impl From<StoreError> for MenuError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => MenuError::NotFound(id),
            StoreError::Rejected(msg) => MenuError::Invalid(msg),
            other => MenuError::Store(other.to_string()),
        }
    }
}
