//! # Table Orders
//!
//! > **The order lifecycle and cart-assembly engine for a restaurant floor.**
//!
//! This crate manages restaurant table orders: building an order from a
//! menu, persisting it exactly once, and maintaining a live queue of
//! pending orders for kitchen staff until each is marked complete.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One actor per table
//!
//! The persistent store is modeled as one Tokio actor per logical table
//! (`menu_items`, `orders`). Each actor processes requests sequentially,
//! which gives the two guarantees the domain needs without any locks:
//! - **Atomic writes**: a single insert or update either fully lands or
//!   leaves the table untouched.
//! - **Isolated state**: the rows are owned by exactly one task; clients
//!   only ever hold a channel.
//!
//! ### Frozen snapshots
//!
//! An order line copies the menu item's name and price at selection time
//! and never looks at the live catalog again. Menus change; history must
//! not.
//!
//! ### Pull, not push
//!
//! The pending queue is a pull-based cache with bounded staleness: a
//! 3-second poll replaces it wholesale, a completed order is removed
//! optimistically after the store confirms, and a failed poll keeps the
//! previous view instead of clearing it.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic record store. Defines [`StoreEntity`](framework::StoreEntity),
//! [`StoreActor`](framework::StoreActor), and
//! [`StoreClient`](framework::StoreClient); the [`framework::mock`] module
//! tests store consumers without spawning actors.
//!
//! ### 2. The Tables ([`model`], [`menu_actor`], [`order_actor`])
//! Record types plus their row logic: validation on insert, patch rules
//! (the one-way `pending -> completed` transition lives here), filters,
//! and listing order.
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific wrappers ([`MenuClient`](clients::MenuClient),
//! [`OrderClient`](clients::OrderClient)) that hide raw message passing
//! and map store errors into table-specific error types.
//!
//! ### 4. The Floor ([`catalog`], [`cart`], [`submitter`], [`queue`])
//! The components an order-taking UI drives: the loaded menu snapshot
//! with presentation-level search, the cart builder, the single-flight
//! submitter, and the polling pending-order queue.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Spins up both store actors, wires the clients, and shuts the system
//! down gracefully. Also home to the tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use table_orders::catalog::MenuCatalog;
//! use table_orders::cart::CartBuilder;
//! use table_orders::lifecycle::TableOrderSystem;
//!
//! let system = TableOrderSystem::new();
//!
//! let catalog = MenuCatalog::load(&system.menu_client).await?;
//! let mut cart = CartBuilder::new();
//! cart.select_item(catalog.items()[0].id.as_str());
//! cart.set_quantity(2);
//! cart.add_line(&catalog)?;
//!
//! let submitter = system.submitter();
//! let order = submitter.submit(Some(4), cart.lines()).await?;
//! cart.reset();
//!
//! let queue = system.pending_queue();
//! queue.activate();
//! // ... kitchen works the queue ...
//! queue.complete(&order.id).await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cart;
pub mod catalog;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod queue;
pub mod submitter;
