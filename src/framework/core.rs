//! # Core Record-Store Framework
//!
//! This module defines the generic building blocks for the record store.
//!
//! ## Key Types
//!
//! - [`StoreEntity`]: The trait that all row types must implement.
//! - [`StoreActor`]: The generic actor that owns one logical table.
//! - [`StoreClient`]: The generic client for talking to a store actor.
//! - [`StoreError`]: Common errors (e.g., StoreClosed, NotFound).

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Row trait)
// =============================================================================

/// Trait that any row type must implement to be managed by a [`StoreActor`].
///
/// # Architecture Note
/// By defining a contract (`StoreEntity`) that both our tables (`menu_items`,
/// `orders`) satisfy, we write the request loop *once* and reuse it for every
/// table. Associated types keep the operations type-safe: a `menu_items`
/// store only accepts `MenuItemCreate` payloads, and the compiler rejects
/// anything else.
///
/// # Row Contract
/// - [`StoreEntity::from_insert`] builds the full row from the id and
///   timestamp the store assigns. Returning `Err` rejects the insert and
///   nothing is written.
/// - [`StoreEntity::apply_patch`] mutates the row in place. A failing patch
///   must leave the row exactly as it was; the store relies on this to keep
///   every update all-or-nothing.
/// - [`StoreEntity::matches`] and [`StoreEntity::listing_order`] define the
///   table's query vocabulary: which rows a filter selects and how a listing
///   is sorted.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this row (e.g., String, Uuid, u64).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to insert a new row (DTO - Data Transfer Object).
    type InsertParams: Send + Sync + Debug;

    /// The partial update applied to an existing row.
    type Patch: Send + Sync + Debug;

    /// The query predicate understood by this table's `select`.
    type Filter: Send + Sync + Debug;

    /// Construct the full row from the store-assigned id and creation
    /// timestamp plus the insert payload.
    fn from_insert(
        id: Self::Id,
        created_at: DateTime<Utc>,
        params: Self::InsertParams,
    ) -> Result<Self, String>;

    /// The row's identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this row is selected by the given filter.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Listing order for `select` results. Rows that compare equal keep
    /// their insertion order.
    fn listing_order(a: &Self, b: &Self) -> Ordering;

    /// Apply a partial update. Must not mutate the row when returning `Err`.
    fn apply_patch(&mut self, patch: Self::Patch) -> Result<(), String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Record store unavailable")]
    StoreClosed,
    #[error("Record store dropped response channel")]
    StoreDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// Type alias for the one-shot response channel used by store actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to a store actor to request operations.
///
/// The variants map 1:1 onto the operations a logical table exposes:
///
/// - **Insert**: Append a new row. The store assigns the id and
///   `created_at`, and replies with the full record.
/// - **Get**: Fetch a single row by id.
/// - **Select**: Fetch every row matching a [`StoreEntity::Filter`], sorted
///   by [`StoreEntity::listing_order`].
/// - **Update**: Apply a [`StoreEntity::Patch`] to one row.
///
/// There is deliberately no delete: rows referenced by history are retired
/// via a patch (e.g. `active := false`), never removed.
pub enum StoreRequest<T: StoreEntity> {
    Insert {
        params: T::InsertParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Select {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC STORE ACTOR
// =============================================================================

/// The generic actor that owns the rows of one logical table.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the rows and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `StoreActor` processes its messages *sequentially* in a loop, so no
/// `Mutex` or `RwLock` is needed for the rows. Sequential processing is also
/// what makes every individual insert and update atomic: a request either
/// fully lands or leaves the table untouched, and no other request can
/// observe a half-applied write.
///
/// Rows are kept in insertion order; `select` sorts stably on top of that,
/// so rows with an equal sort key come back oldest-inserted first.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    rows: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: StoreEntity> StoreActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            rows: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's request loop, processing messages until the channel
    /// closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "table_orders::model::order::Order")
        let table = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(table, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { params, respond_to } => {
                    debug!(table, ?params, "Insert");
                    let id = (self.next_id_fn)();

                    match T::from_insert(id, Utc::now(), params) {
                        Ok(row) => {
                            self.rows.push(row.clone());
                            info!(table, id = %row.id(), rows = self.rows.len(), "Inserted");
                            let _ = respond_to.send(Ok(row));
                        }
                        Err(e) => {
                            warn!(table, error = %e, "Insert rejected");
                            let _ = respond_to.send(Err(StoreError::Rejected(e)));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let row = self.rows.iter().find(|r| *r.id() == id).cloned();
                    debug!(table, %id, found = row.is_some(), "Get");
                    let _ = respond_to.send(Ok(row));
                }
                StoreRequest::Select { filter, respond_to } => {
                    let mut selected: Vec<T> = self
                        .rows
                        .iter()
                        .filter(|r| r.matches(&filter))
                        .cloned()
                        .collect();
                    // Stable sort: ties keep insertion order.
                    selected.sort_by(T::listing_order);
                    debug!(table, ?filter, count = selected.len(), "Select");
                    let _ = respond_to.send(Ok(selected));
                }
                StoreRequest::Update { id, patch, respond_to } => {
                    debug!(table, %id, ?patch, "Update");
                    if let Some(row) = self.rows.iter_mut().find(|r| *r.id() == id) {
                        match row.apply_patch(patch) {
                            Ok(()) => {
                                info!(table, %id, "Updated");
                                let _ = respond_to.send(Ok(()));
                            }
                            Err(e) => {
                                warn!(table, %id, error = %e, "Update rejected");
                                let _ = respond_to.send(Err(StoreError::Rejected(e)));
                            }
                        }
                    } else {
                        warn!(table, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(table, rows = self.rows.len(), "Store shut down");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StoreActor`].
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Insert a new row and return the stored record, with the id and
    /// `created_at` the store assigned.
    pub async fn insert(&self, params: T::InsertParams) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert { params, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Fetch all rows matching `filter`, in the table's listing order.
    pub async fn select(&self, filter: T::Filter) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Select { filter, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update { id, patch, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
    use std::sync::Arc;

    // --- Table Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Reservation {
        id: String,
        party: String,
        seats: u32,
        cancelled: bool,
        created_at: DateTime<Utc>,
    }

    #[derive(Debug)]
    struct ReservationCreate {
        party: String,
        seats: u32,
    }

    #[derive(Debug)]
    struct ReservationPatch {
        cancelled: bool,
    }

    #[derive(Debug)]
    enum ReservationFilter {
        All,
        Open,
    }

    impl StoreEntity for Reservation {
        type Id = String;
        type InsertParams = ReservationCreate;
        type Patch = ReservationPatch;
        type Filter = ReservationFilter;

        fn from_insert(
            id: String,
            created_at: DateTime<Utc>,
            params: ReservationCreate,
        ) -> Result<Self, String> {
            if params.seats == 0 {
                return Err("reservation needs at least one seat".to_string());
            }
            Ok(Self {
                id,
                party: params.party,
                seats: params.seats,
                cancelled: false,
                created_at,
            })
        }

        fn id(&self) -> &String {
            &self.id
        }

        fn matches(&self, filter: &ReservationFilter) -> bool {
            match filter {
                ReservationFilter::All => true,
                ReservationFilter::Open => !self.cancelled,
            }
        }

        fn listing_order(a: &Self, b: &Self) -> Ordering {
            a.party.cmp(&b.party)
        }

        fn apply_patch(&mut self, patch: ReservationPatch) -> Result<(), String> {
            self.cancelled = patch.cancelled;
            Ok(())
        }
    }

    fn spawn_store() -> StoreClient<Reservation> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, AtomicOrdering::SeqCst);
            format!("res_{}", id)
        };
        let (actor, client) = StoreActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn insert_assigns_id_and_returns_record() {
        let client = spawn_store();

        let row = client
            .insert(ReservationCreate { party: "Silva".into(), seats: 4 })
            .await
            .unwrap();

        assert_eq!(row.id, "res_1");
        assert_eq!(row.party, "Silva");
        assert!(!row.cancelled);

        let fetched = client.get("res_1".to_string()).await.unwrap();
        assert_eq!(fetched, Some(row));
    }

    #[tokio::test]
    async fn rejected_insert_writes_nothing() {
        let client = spawn_store();

        let result = client
            .insert(ReservationCreate { party: "Souza".into(), seats: 0 })
            .await;
        assert_eq!(
            result,
            Err(StoreError::Rejected("reservation needs at least one seat".to_string()))
        );

        let all = client.select(ReservationFilter::All).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn select_filters_and_sorts() {
        let client = spawn_store();

        client
            .insert(ReservationCreate { party: "Zimmer".into(), seats: 2 })
            .await
            .unwrap();
        let cancelled = client
            .insert(ReservationCreate { party: "Moraes".into(), seats: 6 })
            .await
            .unwrap();
        client
            .insert(ReservationCreate { party: "Alves".into(), seats: 3 })
            .await
            .unwrap();

        client
            .update(cancelled.id.clone(), ReservationPatch { cancelled: true })
            .await
            .unwrap();

        let open = client.select(ReservationFilter::Open).await.unwrap();
        let parties: Vec<&str> = open.iter().map(|r| r.party.as_str()).collect();
        assert_eq!(parties, vec!["Alves", "Zimmer"]);

        let all = client.select(ReservationFilter::All).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let client = spawn_store();

        let result = client
            .update("res_99".to_string(), ReservationPatch { cancelled: true })
            .await;
        assert_eq!(result, Err(StoreError::NotFound("res_99".to_string())));
    }
}
