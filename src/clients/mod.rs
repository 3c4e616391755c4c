//! Type-safe wrappers around [`StoreClient`](crate::framework::StoreClient).

pub mod menu_client;
pub mod order_client;
pub mod store_handle;

pub use menu_client::*;
pub use order_client::*;
pub use store_handle::*;
