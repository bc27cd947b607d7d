//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `get`,
//! `list` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, Page, PageRequest, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// The resource error converts from [`FrameworkError`], which is where a client turns
/// `NotFound`, `VersionConflict` and boxed entity errors back into its own variants.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Customer> for CustomerClient {
///     type Error = CustomerError;
///
///     fn inner(&self) -> &ResourceClient<Customer> {
///         &self.inner
///     }
/// }
///
/// // get(), list() and delete() are provided automatically.
/// let customer = client.get(id).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::Error::from)
    }

    /// Fetch one page of entities accepted by `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query, page: PageRequest) -> Result<Page<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query, page).await.map_err(Self::Error::from)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::Error::from)
    }
}
