//! # Assembly Actor
//!
//! Keeps one open [`Assembly`] per order. Sessions are stored under the order's
//! own [`OrderId`](crate::model::OrderId), so the actor is keyed: it never invents IDs.
//!
//! - `Put` opens a session, replacing any unfinished one for the same order.
//! - `Update` appends an ingredient.
//! - `Delete` commits: the pancake goes to the
//!   [`OrderRegistry`](crate::clients::OrderRegistry) and the session closes.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AssemblyTracker;
use crate::framework::ResourceActor;
use crate::model::Assembly;

/// Creates a new Assembly actor and its tracker client.
///
/// Run the actor with the [`OrderRegistry`](crate::clients::OrderRegistry) that committed pancakes should go to.
pub fn new(buffer_size: usize) -> (ResourceActor<Assembly>, AssemblyTracker) {
    let (actor, generic_client) = ResourceActor::keyed(buffer_size);
    (actor, AssemblyTracker::new(generic_client))
}
