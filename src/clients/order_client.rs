use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::store_handle::StoreHandle;
use crate::framework::{StoreClient, StoreError};
use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate};
use crate::order_actor::{OrderError, OrderFilter};

/// Client for the `orders` table.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<Order>) -> Self {
        Self { inner }
    }

    /// Inserts a new order. The store assigns id and `created_at` and the
    /// row enters the table as `pending`.
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!(table_number = order.table_number, "Sending request");
        self.inner.insert(order).await.map_err(OrderError::from)
    }

    /// All `pending` orders, oldest first.
    #[instrument(skip(self))]
    pub async fn list_pending(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .select(OrderFilter::Status(OrderStatus::Pending))
            .await
            .map_err(OrderError::from)
    }

    /// Marks the given order `completed`. The transition is one-way; the
    /// row hook rejects anything that would move an order back to
    /// `pending`.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: String) -> Result<(), OrderError> {
        debug!("Sending request");
        let patch = OrderUpdate {
            status: OrderStatus::Completed,
        };
        self.inner.update(id, patch).await.map_err(OrderError::from)
    }
}

#[async_trait]
impl StoreHandle<Order> for OrderClient {
    type Error = OrderError;

    fn store(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;
    use crate::order_actor;
    use rust_decimal_macros::dec;

    fn lines() -> Vec<OrderLine> {
        vec![OrderLine {
            menu_item_id: "menu_1".to_string(),
            name: "Soda".to_string(),
            quantity: 3,
            price: dec!(2.50),
        }]
    }

    #[tokio::test]
    async fn pending_listing_excludes_completed_orders() {
        let (actor, client) = order_actor::new();
        tokio::spawn(actor.run());

        let first = client
            .create_order(OrderCreate {
                table_number: 1,
                items: lines(),
                total: dec!(7.50),
            })
            .await
            .unwrap();
        let second = client
            .create_order(OrderCreate {
                table_number: 2,
                items: lines(),
                total: dec!(7.50),
            })
            .await
            .unwrap();

        client.complete_order(first.id.clone()).await.unwrap();

        let pending = client.list_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, second.id);

        let completed = client.get(first.id).await.unwrap().unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn pending_listing_is_oldest_first() {
        let (actor, client) = order_actor::new();
        tokio::spawn(actor.run());

        let a = client
            .create_order(OrderCreate {
                table_number: 1,
                items: lines(),
                total: dec!(7.50),
            })
            .await
            .unwrap();
        let b = client
            .create_order(OrderCreate {
                table_number: 2,
                items: lines(),
                total: dec!(7.50),
            })
            .await
            .unwrap();

        let pending = client.list_pending().await.unwrap();
        let ids: Vec<&str> = pending.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str()]);
    }

    #[tokio::test]
    async fn completing_unknown_order_is_not_found() {
        let (actor, client) = order_actor::new();
        tokio::spawn(actor.run());

        let result = client.complete_order("order_99".to_string()).await;
        assert_eq!(result, Err(OrderError::NotFound("order_99".to_string())));
    }
}
