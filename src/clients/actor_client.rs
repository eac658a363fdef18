use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// common operations like `get` and `delete`, translated into the client's
/// own error type by [`ActorClient::map_error`].
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Remove an entity by ID. `Ok(None)` means the entity declined removal.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id, params: T::Delete) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id, params).await.map_err(Self::map_error)
    }
}

/// Recovers the entity's own error from [`FrameworkError::EntityError`].
///
/// Any other framework failure, or an entity error of a different type, is handed
/// to `fallback`.
pub fn downcast_entity_error<E>(e: FrameworkError, fallback: impl FnOnce(FrameworkError) -> E) -> E
where
    E: std::error::Error + 'static,
{
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(err) => *err,
            Err(other) => fallback(FrameworkError::EntityError(other)),
        },
        other => fallback(other),
    }
}
