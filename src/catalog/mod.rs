//! # Menu Catalog
//!
//! A loaded snapshot of the selectable menu, plus the presentation-level
//! narrowing used while taking an order.
//!
//! The catalog is read-only: narrowing with [`MenuCatalog::search`] borrows
//! from the snapshot and never mutates or discards it, so clearing the
//! search box brings the full list straight back without another store
//! round-trip.

use crate::clients::MenuClient;
use crate::menu_actor::MenuError;
use crate::model::MenuItem;

/// The menu as loaded for the order-taking screen: every selectable item,
/// in catalog listing order.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Loads the selectable items from the store.
    pub async fn load(menu: &MenuClient) -> Result<Self, MenuError> {
        let items = menu.list_selectable().await?;
        Ok(Self { items })
    }

    /// Builds a catalog from rows already in hand.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The full snapshot, in listing order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Case-insensitive substring match against name OR category. A blank
    /// query matches everything. Purely a view over the snapshot.
    pub fn search(&self, query: &str) -> Vec<&MenuItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item
                        .category
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Resolves an id to a currently selectable item. Items deactivated
    /// since the snapshot was built resolve to `None`.
    pub fn resolve(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id && item.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn item(id: &str, name: &str, category: Option<&str>, active: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price: dec!(10.00),
            description: None,
            category: category.map(str::to_string),
            active,
            created_at: Utc::now(),
        }
    }

    fn catalog() -> MenuCatalog {
        MenuCatalog::from_items(vec![
            item("menu_1", "Soda", Some("Bebidas"), true),
            item("menu_2", "Feijoada", Some("Pratos"), true),
            item("menu_3", "Burger", Some("Lanches"), true),
        ])
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let catalog = catalog();
        let hits = catalog.search("FEIJ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Feijoada");
    }

    #[test]
    fn search_matches_category() {
        let catalog = catalog();
        let hits = catalog.search("bebidas");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Soda");
    }

    #[test]
    fn blank_query_returns_everything() {
        let catalog = catalog();
        assert_eq!(catalog.search("").len(), 3);
        assert_eq!(catalog.search("   ").len(), 3);
    }

    #[test]
    fn search_does_not_touch_the_snapshot() {
        let catalog = catalog();
        let _ = catalog.search("burger");
        assert_eq!(catalog.len(), 3);
        // A second, different narrowing still sees the full list.
        assert_eq!(catalog.search("soda").len(), 1);
    }

    #[test]
    fn resolve_ignores_inactive_items() {
        let catalog = MenuCatalog::from_items(vec![
            item("menu_1", "Soda", None, true),
            item("menu_2", "Burger", None, false),
        ]);
        assert!(catalog.resolve("menu_1").is_some());
        assert!(catalog.resolve("menu_2").is_none());
        assert!(catalog.resolve("menu_9").is_none());
    }
}
