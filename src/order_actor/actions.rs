//! Custom actions and closure reasons for the Order actor.
//!
//! Actions are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action);
//! closures by [`ActorEntity::on_delete`](crate::framework::ActorEntity::on_delete).

use crate::model::Item;

/// Operations on the contents of an order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Merges `quantity` copies of `item` into the order.
    AddItem { item: Item, quantity: u32 },
    /// Removes up to `count` pancakes of the first entry matching `description`.
    ///
    /// # Errors
    /// Fails with [`OrderError::ItemNotFound`](super::OrderError::ItemNotFound) when nothing matches.
    RemoveItems { description: String, count: u32 },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    /// Distinct items in the order after the merge.
    ItemAdded { distinct_items: usize },
    /// Pancakes actually removed, and distinct items left.
    ItemsRemoved { removed: u32, distinct_items: usize },
}

/// Why an order is leaving the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderClosure {
    /// Unconditional.
    Cancel,
    /// Only goes through when the order is prepared.
    Deliver,
}
