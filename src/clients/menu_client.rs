use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::menu_actor::{MenuError, MenuFilter};
use crate::model::{MenuItem, MenuItemCreate, MenuItemUpdate};

/// Client for the `menu_items` table.
///
/// Covers both sides of the catalog: the selection view used when taking
/// orders ([`list_selectable`](MenuClient::list_selectable)) and the
/// maintenance operations of the management screen (create, update, soft
/// delete).
#[derive(Clone)]
pub struct MenuClient {
    inner: StoreClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: StoreClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Adds a new item to the catalog. New items are immediately
    /// selectable.
    #[instrument(skip(self, item))]
    pub async fn create_item(&self, item: MenuItemCreate) -> Result<MenuItem, MenuError> {
        debug!(name = %item.name, "Sending request");
        self.inner.insert(item).await.map_err(MenuError::from)
    }

    /// All items with `active = true`, ordered by category. This is the
    /// source of truth for what an operator may put on a new order.
    #[instrument(skip(self))]
    pub async fn list_selectable(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        self.inner
            .select(MenuFilter::Selectable)
            .await
            .map_err(MenuError::from)
    }

    /// Every item regardless of `active`, for the management screen.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        self.inner
            .select(MenuFilter::All)
            .await
            .map_err(MenuError::from)
    }

    #[instrument(skip(self, update))]
    pub async fn update_item(&self, id: String, update: MenuItemUpdate) -> Result<(), MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(MenuError::from)
    }

    /// Soft delete: the row stays in the table (historical orders still
    /// reference it) but stops being selectable.
    #[instrument(skip(self))]
    pub async fn deactivate_item(&self, id: String) -> Result<(), MenuError> {
        debug!("Sending request");
        let patch = MenuItemUpdate {
            active: Some(false),
            ..Default::default()
        };
        self.inner.update(id, patch).await.map_err(MenuError::from)
    }
}

#[async_trait]
impl StoreHandle<MenuItem> for MenuClient {
    type Error = MenuError;

    fn store(&self) -> &StoreClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        MenuError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu_actor;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn selectable_listing_skips_deactivated_items() {
        let (actor, client) = menu_actor::new();
        tokio::spawn(actor.run());

        let burger = client
            .create_item(MenuItemCreate::new("Burger", dec!(10.00)).with_category("Lanches"))
            .await
            .unwrap();
        client
            .create_item(MenuItemCreate::new("Soda", dec!(2.50)).with_category("Bebidas"))
            .await
            .unwrap();

        client.deactivate_item(burger.id.clone()).await.unwrap();

        let selectable = client.list_selectable().await.unwrap();
        assert_eq!(selectable.len(), 1);
        assert_eq!(selectable[0].name, "Soda");

        // The management view still sees the retired row.
        let all = client.list_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let retired = client.get(burger.id).await.unwrap().unwrap();
        assert!(!retired.active);
    }

    #[tokio::test]
    async fn selectable_listing_is_ordered_by_category() {
        let (actor, client) = menu_actor::new();
        tokio::spawn(actor.run());

        client
            .create_item(MenuItemCreate::new("Feijoada", dec!(32.00)).with_category("Pratos"))
            .await
            .unwrap();
        client
            .create_item(MenuItemCreate::new("Soda", dec!(2.50)).with_category("Bebidas"))
            .await
            .unwrap();
        client
            .create_item(MenuItemCreate::new("Special", dec!(15.00)))
            .await
            .unwrap();

        let selectable = client.list_selectable().await.unwrap();
        let names: Vec<&str> = selectable.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Soda", "Feijoada", "Special"]);
    }
}
