use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable catalog entry.
///
/// # Record Store
/// This struct implements the [`StoreEntity`](crate::framework::StoreEntity)
/// trait, making it a row of the `menu_items` table managed by a
/// [`StoreActor`](crate::framework::StoreActor).
///
/// "Deleting" a menu item sets `active` to `false` instead of removing the
/// row: historical order lines keep referencing the item by id, so rows are
/// retired, never dropped. Only `active` items are selectable for new
/// orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub category: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a new menu item.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update for an existing menu item.
///
/// Soft delete is expressed here as `active: Some(false)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub active: Option<bool>,
}
