//! The `menu_items` table: row logic, filters, and errors.

pub mod entity;
pub mod error;
pub mod filter;

pub use error::*;
pub use filter::*;

use crate::clients::MenuClient;
use crate::framework::StoreActor;
use crate::model::MenuItem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new menu store actor and its client.
pub fn new() -> (StoreActor<MenuItem>, MenuClient) {
    let menu_id_counter = Arc::new(AtomicU64::new(1));
    let next_menu_id = move || {
        let id = menu_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("menu_{}", id)
    };

    let (actor, store) = StoreActor::new(32, next_menu_id);
    let client = MenuClient::new(store);

    (actor, client)
}
