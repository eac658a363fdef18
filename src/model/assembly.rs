//! An assembly session: the pancake currently being put together for one order.

use crate::model::{ItemBuilder, OrderId};

/// The open builder for `order_id`. At most one exists per order at a time.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub order_id: OrderId,
    pub builder: ItemBuilder,
}

impl Assembly {
    /// Opens a session with an empty builder.
    pub fn start(order_id: OrderId) -> Self {
        Self {
            order_id,
            builder: ItemBuilder::begin(),
        }
    }

    pub fn description(&self) -> String {
        self.builder.description()
    }
}

/// Commit payload: how many copies of the assembled pancake go into the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyCommit {
    pub quantity: u32,
}
