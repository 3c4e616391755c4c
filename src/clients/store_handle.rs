use crate::framework::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for table-specific clients to inherit the common lookup operation.
///
/// This trait reduces boilerplate by providing a default implementation for
/// `get`, with framework errors mapped into the table's own error type.
#[async_trait]
pub trait StoreHandle<T: StoreEntity>: Send + Sync {
    /// The table-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn store(&self) -> &StoreClient<T>;

    /// Map framework errors to the table-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.store().get(id).await.map_err(Self::map_error)
    }
}
