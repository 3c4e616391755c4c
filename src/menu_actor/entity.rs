//! Row trait implementation for the MenuItem record type.
//!
//! This module contains the [`StoreEntity`] implementation that makes
//! [`MenuItem`] a row of the `menu_items` table.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::filter::MenuFilter;
use crate::framework::StoreEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemUpdate};

fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("menu item name must not be empty".to_string());
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), String> {
    if price < Decimal::ZERO {
        return Err(format!("menu item price must not be negative: {}", price));
    }
    Ok(())
}

impl StoreEntity for MenuItem {
    type Id = String;
    type InsertParams = MenuItemCreate;
    type Patch = MenuItemUpdate;
    type Filter = MenuFilter;

    /// Builds a new row. New items always start active.
    fn from_insert(
        id: String,
        created_at: DateTime<Utc>,
        params: MenuItemCreate,
    ) -> Result<Self, String> {
        validate_name(&params.name)?;
        validate_price(params.price)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            description: params.description,
            category: params.category,
            active: true,
            created_at,
        })
    }

    fn id(&self) -> &String {
        &self.id
    }

    fn matches(&self, filter: &MenuFilter) -> bool {
        match filter {
            MenuFilter::All => true,
            MenuFilter::Selectable => self.active,
        }
    }

    /// Listings are ordered by category, uncategorized items last, with the
    /// item name breaking ties.
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        let by_category = match (&a.category, &b.category) {
            (Some(ca), Some(cb)) => ca.cmp(cb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_category.then_with(|| a.name.cmp(&b.name))
    }

    /// Applies a partial update. Validation runs before any field is
    /// touched so a rejected patch leaves the row unchanged.
    fn apply_patch(&mut self, patch: MenuItemUpdate) -> Result<(), String> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(name: &str, category: Option<&str>) -> MenuItem {
        MenuItem::from_insert(
            "menu_1".to_string(),
            Utc::now(),
            MenuItemCreate {
                name: name.to_string(),
                price: dec!(10.00),
                description: None,
                category: category.map(str::to_string),
            },
        )
        .unwrap()
    }

    #[test]
    fn new_items_start_active() {
        let row = item("Burger", Some("Lanches"));
        assert!(row.active);
        assert!(row.matches(&MenuFilter::Selectable));
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = MenuItem::from_insert(
            "menu_1".to_string(),
            Utc::now(),
            MenuItemCreate::new("   ", dec!(5.00)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = MenuItem::from_insert(
            "menu_1".to_string(),
            Utc::now(),
            MenuItemCreate::new("Burger", dec!(-1.00)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn deactivated_item_is_not_selectable() {
        let mut row = item("Burger", None);
        row.apply_patch(MenuItemUpdate {
            active: Some(false),
            ..Default::default()
        })
        .unwrap();

        assert!(!row.matches(&MenuFilter::Selectable));
        assert!(row.matches(&MenuFilter::All));
    }

    #[test]
    fn rejected_patch_leaves_row_unchanged() {
        let mut row = item("Burger", None);
        let before = row.clone();

        let result = row.apply_patch(MenuItemUpdate {
            name: Some("  ".to_string()),
            price: Some(dec!(12.00)),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(row, before);
    }

    #[test]
    fn uncategorized_items_sort_last() {
        let drinks = item("Soda", Some("Bebidas"));
        let dishes = item("Feijoada", Some("Pratos"));
        let loose = item("Special", None);

        assert_eq!(MenuItem::listing_order(&drinks, &dishes), Ordering::Less);
        assert_eq!(MenuItem::listing_order(&dishes, &loose), Ordering::Less);
        assert_eq!(MenuItem::listing_order(&loose, &drinks), Ordering::Greater);
    }
}
