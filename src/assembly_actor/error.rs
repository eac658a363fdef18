//! Error types for the Assembly actor.

use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur while assembling and committing pancakes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssemblyError {
    /// Commits need at least one pancake.
    #[error("Count of pancakes should be positive, got {0}")]
    InvalidQuantity(u32),

    /// The ingredient name is not in the catalog.
    #[error("No ingredient with name {0}")]
    UnknownIngredient(String),

    /// `start` was never called for this order, or its pancake was already committed.
    #[error("No in-progress pancake found for {0}. Call start() first.")]
    NoActiveAssembly(String),

    /// The order the pancake was meant for rejected it.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AssemblyError {
    fn from(msg: String) -> Self {
        AssemblyError::ActorCommunicationError(msg)
    }
}
