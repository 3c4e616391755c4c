use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::MenuItem;

/// Fulfillment state of an order. The only transition is
/// `Pending -> Completed`; there is no edge back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("pending"),
            OrderStatus::Completed => f.write_str("completed"),
        }
    }
}

/// A frozen snapshot of a menu item plus the chosen quantity, attached to
/// one order.
///
/// `name` and `price` are copied at selection time and never re-derived
/// from the live catalog, so historical orders stay accurate when the menu
/// changes later. `menu_item_id` is a reference, not ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderLine {
    /// Freezes the given menu item into a line with the chosen quantity.
    pub fn snapshot_of(item: &MenuItem, quantity: u32) -> Self {
        Self {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            quantity,
            price: item.price,
        }
    }

    /// `price × quantity` for this line.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A table order.
///
/// # Record Store
/// This struct implements the [`StoreEntity`](crate::framework::StoreEntity)
/// trait, making it a row of the `orders` table. The store assigns `id` and
/// `created_at` at insert; `total` is computed once at submission and never
/// recomputed from client state afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table_number: u32,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Payload for inserting a new order. Every order starts out `pending`.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub table_number: u32,
    pub items: Vec<OrderLine>,
    pub total: Decimal,
}

/// Partial update for an existing order. Status is the only mutable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}
