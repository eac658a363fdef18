//! # Assembly Tracker
//!
//! Builds pancakes one ingredient at a time and commits them into orders.
//! Sessions are keyed by the target order's ID; there is at most one per order.

use crate::assembly_actor::AssemblyError;
use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Assembly, AssemblyCommit, Item, ItemBuilder, OrderId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Assembly actor.
#[derive(Clone)]
pub struct AssemblyTracker {
    inner: ResourceClient<Assembly>,
}

impl AssemblyTracker {
    pub fn new(inner: ResourceClient<Assembly>) -> Self {
        Self { inner }
    }

    /// Opens a fresh pancake for `order_id`, silently discarding an unfinished one.
    #[instrument(skip(self))]
    pub async fn start(&self, order_id: OrderId) -> Result<(), AssemblyError> {
        let replaced = self.inner.put(order_id, ()).await.map_err(Self::map_error)?;
        debug!(replaced, "Assembly started");
        Ok(())
    }

    /// Resolves `ingredient_name` against the catalog and appends it to the open pancake.
    ///
    /// # Errors
    /// - [`AssemblyError::NoActiveAssembly`] when no pancake is open for the order,
    ///   whatever the name.
    /// - [`AssemblyError::UnknownIngredient`] when the name is not in the catalog.
    #[instrument(skip(self))]
    pub async fn add_ingredient(
        &self,
        order_id: OrderId,
        ingredient_name: &str,
    ) -> Result<(), AssemblyError> {
        self.inner
            .update(order_id, ingredient_name.to_string())
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Commits `quantity` copies of the open pancake into the order and closes the
    /// session.
    ///
    /// Returns `Ok(None)` without doing anything when no pancake is open.
    ///
    /// # Errors
    /// - [`AssemblyError::InvalidQuantity`] when `quantity` is 0.
    /// - [`AssemblyError::Order`] when the order rejects the pancake (e.g. it no
    ///   longer exists); the session then stays open.
    #[instrument(skip(self))]
    pub async fn commit(
        &self,
        order_id: OrderId,
        quantity: u32,
    ) -> Result<Option<Item>, AssemblyError> {
        if quantity < 1 {
            return Err(AssemblyError::InvalidQuantity(quantity));
        }
        match self.delete(order_id, AssemblyCommit { quantity }).await {
            Ok(committed) => Ok(committed.map(|assembly| assembly.builder.build())),
            Err(AssemblyError::NoActiveAssembly(_)) => {
                debug!("Nothing in progress; commit ignored");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Snapshot of the pancake currently open for `order_id`.
    pub async fn in_progress(&self, order_id: OrderId) -> Result<Option<ItemBuilder>, AssemblyError> {
        Ok(self.get(order_id).await?.map(|assembly| assembly.builder))
    }
}

#[async_trait]
impl ActorClient<Assembly> for AssemblyTracker {
    type Error = AssemblyError;

    fn inner(&self) -> &ResourceClient<Assembly> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => AssemblyError::NoActiveAssembly(id),
            other => downcast_entity_error(other, |e| {
                AssemblyError::ActorCommunicationError(e.to_string())
            }),
        }
    }
}
