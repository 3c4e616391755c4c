use tracing::{error, info};

use crate::clients::{MenuClient, OrderClient};
use crate::queue::PendingOrderQueue;
use crate::submitter::OrderSubmitter;

/// The runtime orchestrator for the table-order system.
///
/// `TableOrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the store actors
/// - **Wiring**: Handing out the typed clients and building the
///   submitter/queue components on top of them
///
/// # Architecture
///
/// The system runs two store actors, one per logical table:
/// - **Menu store**: the `menu_items` catalog
/// - **Order store**: the `orders` table
///
/// # Example
///
/// ```ignore
/// let system = TableOrderSystem::new();
///
/// let item = system.menu_client.create_item(item_data).await?;
/// let submitter = system.submitter();
/// let order = submitter.submit(Some(4), cart.lines()).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct TableOrderSystem {
    /// Client for the `menu_items` table
    pub menu_client: MenuClient,

    /// Client for the `orders` table
    pub order_client: OrderClient,

    /// Task handles for the running store actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TableOrderSystem {
    /// Creates and initializes a new `TableOrderSystem` with both store
    /// actors running.
    pub fn new() -> Self {
        let (menu_actor, menu_client) = crate::menu_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let menu_handle = tokio::spawn(menu_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            menu_client,
            order_client,
            handles: vec![menu_handle, order_handle],
        }
    }

    /// A submitter writing to this system's order store.
    pub fn submitter(&self) -> OrderSubmitter {
        OrderSubmitter::new(self.order_client.clone())
    }

    /// A pending-order queue reading from this system's order store. Call
    /// [`PendingOrderQueue::activate`] to start it polling.
    pub fn pending_queue(&self) -> PendingOrderQueue {
        PendingOrderQueue::new(self.order_client.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each store actor
    /// detects the closed channel and exits its request loop. The method
    /// then waits for the actor tasks and reports a panic in any of them
    /// as an error.
    ///
    /// Note: clients cloned out of the system (e.g. inside a submitter or
    /// queue) keep their channel alive; drop those components first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.menu_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store actor task failed: {:?}", e);
                return Err(format!("Store actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for TableOrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
