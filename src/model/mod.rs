//! Pure record types implementing the [`StoreEntity`](crate::framework::StoreEntity) trait.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;
