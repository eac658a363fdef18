//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Building and room numbers must both be at least 1.
    #[error("Building and room number should be positive (building {building}, room {room})")]
    InvalidLocation { building: i32, room: i32 },

    /// Pancakes are added at least one at a time.
    #[error("Count of pancakes should be positive, got {0}")]
    InvalidQuantity(u32),

    /// Merging would push the entry's count past what can be represented.
    #[error("Too many pancakes with description: \"{0}\"")]
    QuantityOverflow(String),

    /// No pancake in the order has the given description.
    #[error("No pancake with description: \"{0}\" found")]
    ItemNotFound(String),

    /// The requested order is not in the registry.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
