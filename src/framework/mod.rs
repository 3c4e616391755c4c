//! Generic record-store framework.
//!
//! This module provides the core building blocks for the persistent store:
//! one actor per logical table, serving `insert`, `get`, `select`, and
//! `update` requests over a channel.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that row types implement to live in a table
//! - [`StoreActor`] - Generic actor that owns one table's rows
//! - [`StoreClient`] - Type-safe handle for store operations
//! - [`StoreError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test store consumers without
//! spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
