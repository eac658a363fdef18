//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the demo binary.
//!
//! The output is compact and hides the module prefix (`with_target(false)`); every
//! actor event carries an `entity_type` field instead. Levels come from `RUST_LOG`:
//!
//! ```bash
//! # Outcomes and audit facts
//! RUST_LOG=info cargo run
//!
//! # Full request payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the actor loop
//! RUST_LOG=pancake_kitchen::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a committed pancake reads roughly:
//!
//! ```text
//! INFO kitchen:commit: Added pancake order_id=order_… description="Delicious pancake with dark chocolate!" distinct_items=1 building=1 room=12
//! INFO kitchen:commit: Deleted entity_type="Assembly" id=order_… size=0
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call it once per process; a second call panics because a global subscriber is
/// already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
