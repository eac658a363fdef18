//! # Audit Trail
//!
//! State-changing order operations report an [`AuditFact`] to an [`AuditSink`].
//! The kitchen never reads facts back; a sink must swallow its own failures.
//!
//! - [`TracingAuditSink`] writes each fact as an `info` event (the default).
//! - [`MemoryAuditSink`] keeps facts in memory, handy for assertions in tests.

use crate::model::{Order, OrderId};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// What happened to the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditEvent {
    ItemAdded,
    ItemsRemoved,
    OrderCancelled,
    OrderDelivered,
}

/// One structured audit record.
///
/// `count` is the number of pancakes involved (removed or delivered);
/// `resulting_count` is how many distinct items the order holds afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFact {
    pub order_id: OrderId,
    pub event: AuditEvent,
    pub description: Option<String>,
    pub count: Option<u64>,
    pub resulting_count: Option<usize>,
    pub building: i32,
    pub room: i32,
}

impl AuditFact {
    fn for_order(order: &Order, event: AuditEvent) -> Self {
        Self {
            order_id: order.id(),
            event,
            description: None,
            count: None,
            resulting_count: None,
            building: order.building(),
            room: order.room(),
        }
    }

    pub fn item_added(order: &Order, description: String) -> Self {
        Self {
            description: Some(description),
            resulting_count: Some(order.distinct_items()),
            ..Self::for_order(order, AuditEvent::ItemAdded)
        }
    }

    pub fn items_removed(order: &Order, description: String, removed: u32) -> Self {
        Self {
            description: Some(description),
            count: Some(u64::from(removed)),
            resulting_count: Some(order.distinct_items()),
            ..Self::for_order(order, AuditEvent::ItemsRemoved)
        }
    }

    pub fn order_cancelled(order: &Order) -> Self {
        Self {
            count: Some(order.distinct_items() as u64),
            ..Self::for_order(order, AuditEvent::OrderCancelled)
        }
    }

    pub fn order_delivered(order: &Order, pancakes: usize) -> Self {
        Self {
            count: Some(pancakes as u64),
            ..Self::for_order(order, AuditEvent::OrderDelivered)
        }
    }
}

/// Receiver of audit facts. Fire-and-forget.
pub trait AuditSink: Send + Sync {
    fn record(&self, fact: AuditFact);
}

/// Writes audit facts to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, fact: AuditFact) {
        let AuditFact {
            order_id,
            event,
            description,
            count,
            resulting_count,
            building,
            room,
        } = fact;
        match event {
            AuditEvent::ItemAdded => info!(
                %order_id,
                description = description.as_deref().unwrap_or_default(),
                distinct_items = resulting_count.unwrap_or_default(),
                building,
                room,
                "Added pancake"
            ),
            AuditEvent::ItemsRemoved => info!(
                %order_id,
                description = description.as_deref().unwrap_or_default(),
                removed = count.unwrap_or_default(),
                distinct_items = resulting_count.unwrap_or_default(),
                building,
                room,
                "Removed pancakes"
            ),
            AuditEvent::OrderCancelled => info!(
                %order_id,
                distinct_items = count.unwrap_or_default(),
                building,
                room,
                "Cancelled order"
            ),
            AuditEvent::OrderDelivered => info!(
                %order_id,
                pancakes = count.unwrap_or_default(),
                building,
                room,
                "Order out for delivery"
            ),
        }
    }
}

/// Keeps every fact it receives. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuditSink {
    facts: Arc<Mutex<Vec<AuditFact>>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far, oldest first.
    pub fn facts(&self) -> Vec<AuditFact> {
        self.facts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, fact: AuditFact) {
        self.facts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(fact);
    }
}
