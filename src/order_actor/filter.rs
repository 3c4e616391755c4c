//! Query filters for the `orders` table.

use crate::model::OrderStatus;

/// Select predicates understood by the order store.
#[derive(Debug, Clone)]
pub enum OrderFilter {
    /// Rows in the given fulfillment state.
    Status(OrderStatus),
}
