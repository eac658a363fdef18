//! Configuration for the kitchen runtime.
//!
//! Loads mailbox sizes from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default channel capacity for each actor.
pub const DEFAULT_MAILBOX: usize = 32;

/// Runtime configuration for [`KitchenSystem`](crate::lifecycle::KitchenSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenConfig {
    /// Capacity of the order registry's request channel
    pub order_mailbox: usize,
    /// Capacity of the assembly tracker's request channel
    pub assembly_mailbox: usize,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            order_mailbox: DEFAULT_MAILBOX,
            assembly_mailbox: DEFAULT_MAILBOX,
        }
    }
}

impl KitchenConfig {
    /// Load configuration from `KITCHEN_ORDER_MAILBOX` and `KITCHEN_ASSEMBLY_MAILBOX`.
    ///
    /// Missing, unparsable or zero values fall back to [`DEFAULT_MAILBOX`].
    pub fn from_env() -> Self {
        Self {
            order_mailbox: mailbox_from_env("KITCHEN_ORDER_MAILBOX"),
            assembly_mailbox: mailbox_from_env("KITCHEN_ASSEMBLY_MAILBOX"),
        }
    }
}

fn mailbox_from_env(key: &str) -> usize {
    parse_mailbox(env::var(key).ok().as_deref())
}

// tokio's mpsc panics on a zero capacity.
fn parse_mailbox(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse().ok())
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_MAILBOX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KitchenConfig::default();
        assert_eq!(config.order_mailbox, 32);
        assert_eq!(config.assembly_mailbox, 32);
    }

    #[test]
    fn test_parse_mailbox() {
        assert_eq!(parse_mailbox(Some("64")), 64);
        assert_eq!(parse_mailbox(Some(" 8 ")), 8);
        assert_eq!(parse_mailbox(Some("0")), DEFAULT_MAILBOX);
        assert_eq!(parse_mailbox(Some("lots")), DEFAULT_MAILBOX);
        assert_eq!(parse_mailbox(None), DEFAULT_MAILBOX);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = KitchenConfig {
            order_mailbox: 4,
            assembly_mailbox: 2,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<KitchenConfig>(&json).unwrap(), config);
    }
}
