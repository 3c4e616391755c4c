//! # Order Submitter
//!
//! Turns a validated cart plus table number into a persisted `pending`
//! order, exactly once.
//!
//! Validation runs before anything touches the store, and a single-flight
//! gate drops duplicate invocations while one submission is outstanding -
//! the double-clicked "send order" button creates one order, not two.

pub mod error;

pub use error::SubmitError;

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, instrument, warn};

use crate::clients::OrderClient;
use crate::model::{Order, OrderCreate, OrderLine};

/// Releases the in-flight gate when dropped, so the gate opens again on
/// every exit path - success, store error, or panic.
struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
    /// Claims the gate, or returns `None` if a submission is already in
    /// flight.
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Submits carts as orders, guaranteeing at most one in-flight submission.
pub struct OrderSubmitter {
    orders: OrderClient,
    in_flight: AtomicBool,
}

impl OrderSubmitter {
    pub fn new(orders: OrderClient) -> Self {
        Self {
            orders,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates and persists one order.
    ///
    /// Preconditions are checked in order and abort before any store call:
    /// a table number must be present, positive, and the cart must hold at
    /// least one line. The total is recomputed from `lines` here - a total
    /// cached earlier by the caller is never trusted.
    ///
    /// On success the returned [`Order`] is the stored record (`pending`,
    /// with store-assigned id and timestamp); the caller is expected to
    /// reset its cart. On failure the caller's state is untouched, so the
    /// operator can retry without re-entering anything.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn submit(
        &self,
        table_number: Option<u32>,
        lines: &[OrderLine],
    ) -> Result<Order, SubmitError> {
        let table_number = table_number.ok_or(SubmitError::MissingTableNumber)?;
        if table_number == 0 {
            return Err(SubmitError::InvalidTableNumber);
        }
        if lines.is_empty() {
            return Err(SubmitError::EmptyOrder);
        }

        let Some(_guard) = FlightGuard::acquire(&self.in_flight) else {
            warn!(table_number, "Submission already in flight, dropping");
            return Err(SubmitError::AlreadyInFlight);
        };

        let total = lines.iter().map(OrderLine::line_total).sum();
        debug!(table_number, %total, "Submitting order");

        let order = self
            .orders
            .create_order(OrderCreate {
                table_number,
                items: lines.to_vec(),
                total,
            })
            .await
            .map_err(SubmitError::Persistence)?;

        info!(id = %order.id, table_number, %total, "Order submitted");
        Ok(order)
        // _guard drops here, reopening the gate.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_insert};
    use crate::framework::StoreError;
    use crate::model::OrderStatus;
    use crate::order_actor::{self, OrderError};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn soda_lines() -> Vec<OrderLine> {
        vec![OrderLine {
            menu_item_id: "menu_1".to_string(),
            name: "Soda".to_string(),
            quantity: 3,
            price: dec!(2.50),
        }]
    }

    #[tokio::test]
    async fn submitted_order_is_pending_with_computed_total() {
        let (actor, client) = order_actor::new();
        tokio::spawn(actor.run());
        let submitter = OrderSubmitter::new(client.clone());

        let order = submitter.submit(Some(4), &soda_lines()).await.unwrap();

        assert_eq!(order.table_number, 4);
        assert_eq!(order.total, dec!(7.50));
        assert_eq!(order.status, OrderStatus::Pending);

        // The store holds the same record.
        let pending = client.list_pending().await.unwrap();
        assert_eq!(pending, vec![order]);
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_store() {
        let (client, mut receiver) = create_mock_client(10);
        let submitter = OrderSubmitter::new(OrderClient::new(client));

        let missing = submitter.submit(None, &soda_lines()).await;
        assert_eq!(missing.unwrap_err(), SubmitError::MissingTableNumber);

        let zero = submitter.submit(Some(0), &soda_lines()).await;
        assert_eq!(zero.unwrap_err(), SubmitError::InvalidTableNumber);

        let empty = submitter.submit(Some(4), &[]).await;
        assert_eq!(empty.unwrap_err(), SubmitError::EmptyOrder);

        // No request may have been sent.
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn second_submission_is_dropped_while_first_is_in_flight() {
        let (client, mut receiver) = create_mock_client(10);
        let submitter = Arc::new(OrderSubmitter::new(OrderClient::new(client)));

        let first = {
            let submitter = submitter.clone();
            tokio::spawn(async move { submitter.submit(Some(4), &soda_lines()).await })
        };

        // Hold the store response open so the first submission stays in
        // flight.
        let (params, responder) = expect_insert(&mut receiver)
            .await
            .expect("Expected Insert request");
        assert!(submitter.is_in_flight());

        let second = submitter.submit(Some(4), &soda_lines()).await;
        assert_eq!(second.unwrap_err(), SubmitError::AlreadyInFlight);

        let stored = Order {
            id: "order_1".to_string(),
            table_number: params.table_number,
            items: params.items,
            status: OrderStatus::Pending,
            total: params.total,
            created_at: Utc::now(),
        };
        responder.send(Ok(stored)).unwrap();

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.id, "order_1");
        assert!(!submitter.is_in_flight());

        // Exactly one insert reached the store.
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn gate_reopens_after_store_failure() {
        let (client, mut receiver) = create_mock_client(10);
        let submitter = Arc::new(OrderSubmitter::new(OrderClient::new(client)));

        let attempt = {
            let submitter = submitter.clone();
            tokio::spawn(async move { submitter.submit(Some(4), &soda_lines()).await })
        };

        let (_params, responder) = expect_insert(&mut receiver)
            .await
            .expect("Expected Insert request");
        responder
            .send(Err(StoreError::Rejected("store offline".to_string())))
            .unwrap();

        let result = attempt.await.unwrap();
        assert_eq!(
            result.unwrap_err(),
            SubmitError::Persistence(OrderError::Invalid("store offline".to_string()))
        );

        // The gate is open again, so the operator's retry goes through.
        assert!(!submitter.is_in_flight());
        let retry = {
            let submitter = submitter.clone();
            tokio::spawn(async move { submitter.submit(Some(4), &soda_lines()).await })
        };
        let (params, responder) = expect_insert(&mut receiver)
            .await
            .expect("Expected Insert request");
        responder
            .send(Ok(Order {
                id: "order_1".to_string(),
                table_number: params.table_number,
                items: params.items,
                status: OrderStatus::Pending,
                total: params.total,
                created_at: Utc::now(),
            }))
            .unwrap();
        assert!(retry.await.unwrap().is_ok());
    }
}
