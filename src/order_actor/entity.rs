//! Row trait implementation for the Order record type.
//!
//! This module contains the [`StoreEntity`] implementation that makes
//! [`Order`] a row of the `orders` table, including the one-way status
//! transition enforced on update.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::filter::OrderFilter;
use crate::framework::StoreEntity;
use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate};

impl StoreEntity for Order {
    type Id = String;
    type InsertParams = OrderCreate;
    type Patch = OrderUpdate;
    type Filter = OrderFilter;

    /// Builds a new row. Every order enters the table as `pending`.
    fn from_insert(
        id: String,
        created_at: DateTime<Utc>,
        params: OrderCreate,
    ) -> Result<Self, String> {
        if params.table_number == 0 {
            return Err("table number must be positive".to_string());
        }
        if params.items.is_empty() {
            return Err("order must contain at least one line".to_string());
        }
        Ok(Self {
            id,
            table_number: params.table_number,
            items: params.items,
            status: OrderStatus::Pending,
            total: params.total,
            created_at,
        })
    }

    fn id(&self) -> &String {
        &self.id
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::Status(status) => self.status == *status,
        }
    }

    /// Listings come back oldest first, so the kitchen serves
    /// first-in-first-out.
    fn listing_order(a: &Self, b: &Self) -> Ordering {
        a.created_at.cmp(&b.created_at)
    }

    /// Status is the only mutable field, and the transition is one-way:
    /// `pending -> completed`. Completing an already completed order is a
    /// no-op, so two staff screens racing on the same order both succeed.
    fn apply_patch(&mut self, patch: OrderUpdate) -> Result<(), String> {
        match (self.status, patch.status) {
            (OrderStatus::Pending, OrderStatus::Completed) => {
                self.status = OrderStatus::Completed;
                Ok(())
            }
            (OrderStatus::Completed, OrderStatus::Completed) => Ok(()),
            (OrderStatus::Pending, OrderStatus::Pending) => Ok(()),
            (OrderStatus::Completed, OrderStatus::Pending) => {
                Err("a completed order cannot return to pending".to_string())
            }
        }
    }
}
