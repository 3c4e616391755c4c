//! Error types for the cart builder.

use thiserror::Error;

/// User-correctable problems while assembling a cart. None of these reach
/// the store; the cart is left unchanged so the operator can retry
/// immediately.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// No menu item is currently selected.
    #[error("No menu item selected")]
    NothingSelected,

    /// The pending quantity is below the minimum of 1.
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    /// The selected id does not resolve to a currently selectable item,
    /// e.g. it was deactivated between loading the menu and selecting it.
    #[error("Menu item is not available: {0}")]
    UnknownItem(String),
}
