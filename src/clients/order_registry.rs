//! # Order Registry
//!
//! The operation surface for live orders. Every call is one request to the Order
//! actor, so each operation is applied atomically with respect to the registry's
//! table; sequences of calls are not.

use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Delivery, Item, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderClosure, OrderError};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderRegistry {
    inner: ResourceClient<Order>,
}

impl OrderRegistry {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Registers a new, empty order for the given location.
    ///
    /// # Errors
    /// [`OrderError::InvalidLocation`] if either number is below 1.
    #[instrument(skip(self))]
    pub async fn create_order(&self, building: i32, room: i32) -> Result<OrderId, OrderError> {
        debug!("Sending create_order to actor");
        self.inner
            .create(OrderCreate { building, room })
            .await
            .map_err(Self::map_error)
    }

    /// Merges `quantity` copies of `item` into the order and returns the number of
    /// distinct items it now holds.
    ///
    /// # Errors
    /// [`OrderError::InvalidQuantity`] for a zero `quantity`; nothing is recorded.
    #[instrument(skip(self, item), fields(item = %item.id()))]
    pub async fn add_item(
        &self,
        order_id: OrderId,
        item: Item,
        quantity: u32,
    ) -> Result<usize, OrderError> {
        match self.action(order_id, OrderAction::AddItem { item, quantity }).await? {
            OrderActionResult::ItemAdded { distinct_items } => Ok(distinct_items),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Removes up to `count` pancakes matching `description`; returns how many were
    /// actually removed.
    #[instrument(skip(self))]
    pub async fn remove_items(
        &self,
        order_id: OrderId,
        description: &str,
        count: u32,
    ) -> Result<u32, OrderError> {
        let action = OrderAction::RemoveItems {
            description: description.to_string(),
            count,
        };
        match self.action(order_id, action).await? {
            OrderActionResult::ItemsRemoved { removed, .. } => Ok(removed),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Removes the order whatever its status.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        match self.delete(order_id, OrderClosure::Cancel).await? {
            Some(_) => Ok(()),
            // A cancellation is never declined; treat it as already gone.
            None => Err(OrderError::OrderNotFound(order_id.to_string())),
        }
    }

    #[instrument(skip(self))]
    pub async fn complete_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        self.set_status(order_id, OrderStatus::Completed).await
    }

    #[instrument(skip(self))]
    pub async fn prepare_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        self.set_status(order_id, OrderStatus::Prepared).await
    }

    pub async fn list_completed(&self) -> Result<HashSet<OrderId>, OrderError> {
        self.list_with_status(OrderStatus::Completed).await
    }

    pub async fn list_prepared(&self) -> Result<HashSet<OrderId>, OrderError> {
        self.list_with_status(OrderStatus::Prepared).await
    }

    /// The order's pancakes, one description per unit. Unknown orders yield an
    /// empty list.
    #[instrument(skip(self))]
    pub async fn view_order(&self, order_id: OrderId) -> Result<Vec<String>, OrderError> {
        Ok(self
            .find_order(order_id)
            .await?
            .map(|order| order.view())
            .unwrap_or_default())
    }

    /// Snapshot of a live order.
    pub async fn find_order(&self, order_id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(order_id).await
    }

    /// Hands a prepared order over for delivery, removing it from the registry.
    ///
    /// Returns `Ok(None)` and leaves the order untouched when it is not prepared yet.
    ///
    /// # Errors
    /// [`OrderError::OrderNotFound`] for an unknown order.
    #[instrument(skip(self))]
    pub async fn deliver_order(&self, order_id: OrderId) -> Result<Option<Delivery>, OrderError> {
        let Some(order) = self.delete(order_id, OrderClosure::Deliver).await? else {
            info!(%order_id, "Order not prepared; delivery skipped");
            return Ok(None);
        };
        let items = order.view();
        Ok(Some(Delivery { order, items }))
    }

    async fn set_status(&self, order_id: OrderId, status: OrderStatus) -> Result<(), OrderError> {
        self.inner
            .update(order_id, status)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    async fn list_with_status(&self, status: OrderStatus) -> Result<HashSet<OrderId>, OrderError> {
        let ids = self
            .inner
            .list_ids(move |order: &Order| order.status() == status)
            .await
            .map_err(Self::map_error)?;
        Ok(ids.into_iter().collect())
    }

    async fn action(
        &self,
        order_id: OrderId,
        action: OrderAction,
    ) -> Result<OrderActionResult, OrderError> {
        self.inner
            .perform_action(order_id, action)
            .await
            .map_err(Self::map_error)
    }

    fn unexpected(result: OrderActionResult) -> OrderError {
        OrderError::ActorCommunicationError(format!("unexpected action result {result:?}"))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderRegistry {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::OrderNotFound(id),
            other => downcast_entity_error(other, |e| {
                OrderError::ActorCommunicationError(e.to_string())
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let mut mock = MockClient::<Order>::new();
        let id = OrderId::new();
        mock.expect_action(id).return_err(FrameworkError::EntityError(Box::new(
            OrderError::ItemNotFound("Delicious pancake with !".into()),
        )));
        mock.expect_update(id)
            .return_err(FrameworkError::NotFound(id.to_string()));
        mock.expect_create().return_err(FrameworkError::ActorClosed);

        let registry = OrderRegistry::new(mock.client());
        assert_eq!(
            registry.remove_items(id, "Delicious pancake with !", 1).await,
            Err(OrderError::ItemNotFound("Delicious pancake with !".into()))
        );
        assert_eq!(
            registry.complete_order(id).await,
            Err(OrderError::OrderNotFound(id.to_string()))
        );
        assert!(matches!(
            registry.create_order(1, 1).await,
            Err(OrderError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_lists_collect_ids_from_actor() {
        let mut mock = MockClient::<Order>::new();
        let first = OrderId::new();
        let second = OrderId::new();
        mock.expect_list().return_ok(vec![first, second]);
        mock.expect_list().return_ok(Vec::new());

        let registry = OrderRegistry::new(mock.client());
        assert_eq!(
            registry.list_completed().await.unwrap(),
            HashSet::from([first, second])
        );
        assert!(registry.list_prepared().await.unwrap().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_declined_delivery_is_none() {
        let mut mock = MockClient::<Order>::new();
        let id = OrderId::new();
        mock.expect_delete(id).return_ok(None);

        let registry = OrderRegistry::new(mock.client());
        assert!(registry.deliver_order(id).await.unwrap().is_none());
        mock.verify();
    }
}
