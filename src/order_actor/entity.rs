//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`crate::framework::ResourceActor`].

use super::actions::{OrderAction, OrderActionResult, OrderClosure};
use super::error::OrderError;
use crate::audit::{AuditFact, AuditSink};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderStatus;
    type Delete = OrderClosure;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Arc<dyn AuditSink>;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Order::new(id, params.building, params.room)
    }

    /// Status changes are not checked against the current status.
    async fn on_update(
        &mut self,
        status: OrderStatus,
        _ctx: &Self::Context,
    ) -> Result<(), OrderError> {
        self.set_status(status);
        Ok(())
    }

    async fn on_delete(
        &self,
        closure: OrderClosure,
        audit: &Self::Context,
    ) -> Result<bool, OrderError> {
        match closure {
            OrderClosure::Cancel => {
                audit.record(AuditFact::order_cancelled(self));
                Ok(true)
            }
            OrderClosure::Deliver if self.status() != OrderStatus::Prepared => {
                debug!(order_id = %self.id(), status = ?self.status(), "Not ready for delivery");
                Ok(false)
            }
            OrderClosure::Deliver => {
                audit.record(AuditFact::order_delivered(self, self.view().len()));
                Ok(true)
            }
        }
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        audit: &Self::Context,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AddItem { item, quantity } => {
                let description = item.description();
                self.add_item(item, quantity)?;
                audit.record(AuditFact::item_added(self, description));
                Ok(OrderActionResult::ItemAdded {
                    distinct_items: self.distinct_items(),
                })
            }
            OrderAction::RemoveItems { description, count } => {
                let removed = self.remove_items(&description, count)?;
                audit.record(AuditFact::items_removed(self, description, removed));
                Ok(OrderActionResult::ItemsRemoved {
                    removed,
                    distinct_items: self.distinct_items(),
                })
            }
        }
    }
}
