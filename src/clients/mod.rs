//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! These are the kitchen's public operation surface: [`OrderRegistry`] for orders
//! and [`AssemblyTracker`] for pancakes under construction.

pub mod actor_client;
pub mod assembly_tracker;
pub mod order_registry;

pub use actor_client::ActorClient;
pub use assembly_tracker::*;
pub use order_registry::*;
