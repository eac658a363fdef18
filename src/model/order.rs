//! Represents a customer order: a quantity-tracked list of pancakes for one room.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`crate::order_actor`] for the custom actions and the closure reasons.

use crate::model::{Item, ItemId};
use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle state of a live order.
///
/// Delivered and cancelled orders are not represented: they leave the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Created,
    Completed,
    Prepared,
}

#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    building: i32,
    room: i32,
    items: Vec<(Item, u64)>,
    status: OrderStatus,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderCreate {
    pub building: i32,
    pub room: i32,
}

impl Order {
    /// Creates an empty order in [`OrderStatus::Created`].
    ///
    /// # Errors
    /// [`OrderError::InvalidLocation`] unless both `building` and `room` are at least 1.
    pub fn new(id: OrderId, building: i32, room: i32) -> Result<Self, OrderError> {
        if building < 1 || room < 1 {
            return Err(OrderError::InvalidLocation { building, room });
        }
        Ok(Self {
            id,
            building,
            room,
            items: Vec::new(),
            status: OrderStatus::Created,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn building(&self) -> i32 {
        self.building
    }

    pub fn room(&self) -> i32 {
        self.room
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Entries in insertion order, each with its (positive) count.
    pub fn items(&self) -> impl Iterator<Item = (&Item, u64)> + '_ {
        self.items.iter().map(|(item, count)| (item, *count))
    }

    /// Number of distinct items (entries) in the order.
    pub fn distinct_items(&self) -> usize {
        self.items.len()
    }

    /// Total number of pancakes across all entries.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|(_, count)| *count).sum()
    }

    pub fn quantity_of(&self, item: ItemId) -> Option<u64> {
        self.items
            .iter()
            .find(|(entry, _)| entry.id() == item)
            .map(|(_, count)| *count)
    }

    /// Adds `count` of `item`, merging with an existing entry for the same item identity.
    ///
    /// # Errors
    /// - [`OrderError::InvalidQuantity`] when `count` is 0.
    /// - [`OrderError::QuantityOverflow`] when the merged count no longer fits.
    ///
    /// The order is unchanged on error.
    pub fn add_item(&mut self, item: Item, count: u32) -> Result<(), OrderError> {
        if count == 0 {
            return Err(OrderError::InvalidQuantity(count));
        }
        match self.items.iter_mut().find(|(entry, _)| *entry == item) {
            Some((entry, existing)) => {
                *existing = existing
                    .checked_add(u64::from(count))
                    .ok_or_else(|| OrderError::QuantityOverflow(entry.description()))?;
            }
            None => self.items.push((item, u64::from(count))),
        }
        Ok(())
    }

    /// Removes up to `count` pancakes from the first entry whose description matches.
    ///
    /// Returns how many were actually removed; asking for more than the entry holds
    /// removes the whole entry.
    ///
    /// # Errors
    /// [`OrderError::ItemNotFound`] when no entry has that description. Nothing changes.
    pub fn remove_items(&mut self, description: &str, count: u32) -> Result<u32, OrderError> {
        let index = self
            .items
            .iter()
            .position(|(item, _)| item.description() == description)
            .ok_or_else(|| OrderError::ItemNotFound(description.to_string()))?;

        let existing = self.items[index].1;
        let requested = u64::from(count);
        if existing <= requested {
            self.items.remove(index);
            // existing <= count, so it fits.
            Ok(existing as u32)
        } else {
            self.items[index].1 = existing - requested;
            Ok(count)
        }
    }

    /// One description per pancake, grouped by entry in insertion order.
    pub fn view(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|(item, count)| {
                let description = item.description();
                std::iter::repeat(description).take(*count as usize)
            })
            .collect()
    }
}

/// What `deliver_order` hands back: the order as it left the kitchen and its pancakes.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub order: Order,
    pub items: Vec<String>,
}
