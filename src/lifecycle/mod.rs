//! # Lifecycle
//!
//! Starts the kitchen's actors, wires them together and shuts them down.

mod kitchen_system;
pub mod tracing;

pub use kitchen_system::KitchenSystem;
