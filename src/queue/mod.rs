//! # Pending Order Queue
//!
//! The kitchen's live view of `pending` orders.
//!
//! The queue keeps a locally cached, eventually-consistent copy of the
//! pending orders and refreshes it by polling the store on a fixed
//! interval. Completing an order updates the store first and only then
//! removes the order from the cache, so the view never shows a completion
//! that did not actually persist.
//!
//! A refresh that resolves after the component was deactivated is
//! discarded rather than written, and a refresh that fails leaves the
//! previous cache untouched - stale-but-correct beats empty.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::clients::OrderClient;
use crate::model::Order;
use crate::order_actor::OrderError;

/// How often the store is polled for pending orders while activated.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Live queue of pending orders with polling refresh and optimistic
/// completion.
///
/// # Concurrency
/// A `complete` call may interleave with an in-flight `refresh`. That is
/// tolerated by design: local removal is idempotent (removing an id that
/// is absent is a no-op), and the next refresh result is authoritative. A
/// refresh response that predates a completion can transiently bring the
/// completed order back; the following poll cycle corrects it. The
/// staleness window is bounded by one poll interval.
pub struct PendingOrderQueue {
    orders: OrderClient,
    cache: Arc<Mutex<Vec<Order>>>,
    /// Cleared on deactivation. An in-flight refresh rechecks this after
    /// its store call resolves, so a torn-down queue is never written to.
    live: Arc<AtomicBool>,
    poll_interval: Duration,
    poll_task: Mutex<Option<JoinHandle<()>>>,
}

impl PendingOrderQueue {
    pub fn new(orders: OrderClient) -> Self {
        Self {
            orders,
            cache: Arc::new(Mutex::new(Vec::new())),
            live: Arc::new(AtomicBool::new(true)),
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_task: Mutex::new(None),
        }
    }

    /// Overrides the poll interval (used by tests; the default is 3 s).
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Snapshot of the cached pending orders, oldest first.
    pub fn pending(&self) -> Vec<Order> {
        self.cache.lock().unwrap().clone()
    }

    /// Whether the polling loop is currently running.
    pub fn is_polling(&self) -> bool {
        self.poll_task.lock().unwrap().is_some()
    }

    /// Starts the polling loop: an immediate refresh, then one per
    /// interval. Activating an already active queue is a no-op, so
    /// repeated activate/deactivate cycles never pile up timers.
    pub fn activate(&self) {
        let mut poll_task = self.poll_task.lock().unwrap();
        if poll_task.is_some() {
            return;
        }
        self.live.store(true, Ordering::Release);

        let orders = self.orders.clone();
        let cache = self.cache.clone();
        let live = self.live.clone();
        let poll_interval = self.poll_interval;

        info!(interval_ms = poll_interval.as_millis() as u64, "Pending order polling started");
        *poll_task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            loop {
                // First tick fires immediately: activation implies a refresh.
                ticker.tick().await;
                if !live.load(Ordering::Acquire) {
                    break;
                }
                if let Err(e) = Self::fetch_into(&orders, &cache, &live).await {
                    warn!(error = %e, "Refresh failed, keeping cached pending orders");
                }
            }
        }));
    }

    /// Stops polling and bars any in-flight refresh from writing. The
    /// cache itself is left intact for a later re-activation.
    pub fn deactivate(&self) {
        self.live.store(false, Ordering::Release);
        if let Some(task) = self.poll_task.lock().unwrap().take() {
            task.abort();
            info!("Pending order polling stopped");
        }
    }

    /// Fetches the pending orders and replaces the cache wholesale.
    ///
    /// On failure the cache is untouched and the error is surfaced. After
    /// deactivation this is a no-op.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<(), OrderError> {
        if !self.live.load(Ordering::Acquire) {
            debug!("Queue deactivated, skipping refresh");
            return Ok(());
        }
        Self::fetch_into(&self.orders, &self.cache, &self.live).await
    }

    /// Marks the order `completed` in the store, then removes it from the
    /// local cache so the view reflects the change without waiting a full
    /// poll cycle.
    ///
    /// The removal happens only after the store confirmed the update, and
    /// removing an id that is already absent is a no-op. On failure the
    /// order stays in the cache.
    #[instrument(skip(self))]
    pub async fn complete(&self, id: &str) -> Result<(), OrderError> {
        self.orders.complete_order(id.to_string()).await?;

        let mut cache = self.cache.lock().unwrap();
        let before = cache.len();
        cache.retain(|order| order.id != id);
        info!(%id, removed = before - cache.len(), "Order completed");
        Ok(())
    }

    async fn fetch_into(
        orders: &OrderClient,
        cache: &Mutex<Vec<Order>>,
        live: &AtomicBool,
    ) -> Result<(), OrderError> {
        let fetched = orders.list_pending().await?;

        // The queue may have been torn down while the request was in
        // flight; a stale response must not write to it.
        if !live.load(Ordering::Acquire) {
            debug!("Queue deactivated, discarding refresh result");
            return Ok(());
        }

        let mut cache = cache.lock().unwrap();
        debug!(count = fetched.len(), "Pending orders refreshed");
        *cache = fetched;
        Ok(())
    }
}

impl Drop for PendingOrderQueue {
    fn drop(&mut self) {
        self.deactivate();
    }
}
