//! # Order Actor
//!
//! The actor behind [`OrderRegistry`]: it owns every live [`Order`] and applies
//! each request to its table one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`], [`OrderActionResult`] and [`OrderClosure`]
//! - [`new()`] - Factory function that creates the actor and its registry client
//!
//! ## Context
//!
//! The actor runs with an `Arc<dyn AuditSink>` as its context; the entity hooks
//! report every content change, cancellation and delivery to it.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderRegistry;
use crate::framework::ResourceActor;
use crate::model::{Order, OrderId};

/// Creates a new Order actor and its registry client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderRegistry) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, OrderId::new);
    (actor, OrderRegistry::new(generic_client))
}
