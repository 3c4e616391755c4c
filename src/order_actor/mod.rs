//! The `orders` table: row logic, filters, and errors.

pub mod entity;
pub mod error;
pub mod filter;

pub use error::*;
pub use filter::*;

use crate::clients::OrderClient;
use crate::framework::StoreActor;
use crate::model::Order;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new order store actor and its client.
pub fn new() -> (StoreActor<Order>, OrderClient) {
    let order_id_counter = Arc::new(AtomicU64::new(1));
    let next_order_id = move || {
        let id = order_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("order_{}", id)
    };

    let (actor, store) = StoreActor::new(32, next_order_id);
    let client = OrderClient::new(store);

    (actor, client)
}
