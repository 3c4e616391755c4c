//! System wiring and observability.

pub mod order_system;
pub mod tracing;

pub use order_system::TableOrderSystem;
pub use self::tracing::setup_tracing;
