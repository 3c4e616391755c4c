//! Error types for order submission.

use thiserror::Error;

use crate::order_actor::OrderError;

/// Errors that can occur while submitting an order.
///
/// The first three are validation failures: they are raised before any
/// store call and leave the cart and table number untouched for an
/// immediate retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    /// No table number was provided.
    #[error("No table number provided")]
    MissingTableNumber,

    /// The table number must be a positive integer.
    #[error("Table number must be positive")]
    InvalidTableNumber,

    /// The cart holds no lines.
    #[error("Order has no items")]
    EmptyOrder,

    /// Another submission of this cart is still outstanding; this one was
    /// dropped, not queued.
    #[error("A submission is already in flight")]
    AlreadyInFlight,

    /// The store rejected or failed the insert. No partial order exists.
    #[error("Failed to persist order: {0}")]
    Persistence(#[source] OrderError),
}
