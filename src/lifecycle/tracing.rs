//! # Observability & Tracing
//!
//! Structured logging setup for the whole system.
//!
//! The store actors log every operation with the table name and record id
//! as structured fields, and the clients open a span per request via
//! `#[instrument]`. Levels follow the usual split: `info` for state
//! changes (inserted, updated, completed), `debug` for request payloads,
//! `warn` for rejected writes and failed poll cycles.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo test
//!
//! # Show full payloads
//! RUST_LOG=debug cargo test
//!
//! # Filter to the store framework only
//! RUST_LOG=table_orders::framework=debug cargo test
//! ```
//!
//! With `RUST_LOG=info`, a submit-then-complete flow looks like:
//!
//! ```text
//! INFO Inserted table="Order" id="order_1" rows=1
//! INFO Order submitted id="order_1" table_number=4 total=7.50
//! INFO Updated table="Order" id="order_1"
//! INFO Order completed id="order_1" removed=1
//! ```

/// Initializes the global tracing subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the table field carries the context
        .compact()
        .init();
}
