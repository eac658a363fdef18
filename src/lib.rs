#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Pancake Kitchen
//!
//! > **Order intake and pancake assembly for a building-wide pancake delivery service.**
//!
//! Customers open an order for their room, the kitchen assembles pancakes one
//! ingredient at a time and commits them into the order in bulk, and the order then
//! moves through completion and preparation until it is delivered (or cancelled).
//!
//! ## 🏗️ Design
//!
//! Each table of state is owned by a single actor running on its own Tokio task:
//!
//! - The **Order actor** owns every live [`Order`](model::Order).
//! - The **Assembly actor** owns the in-progress pancakes, one per order.
//!
//! Requests are processed one at a time, so every registry or tracker operation is
//! atomic with respect to its table and mutations of one order never interleave. The
//! clients ([`OrderRegistry`](clients::OrderRegistry),
//! [`AssemblyTracker`](clients::AssemblyTracker)) are cheap to clone and can be used
//! from any number of tasks.
//!
//! ### Error Handling
//! Each actor has its own `thiserror` enum ([`OrderError`](order_actor::OrderError),
//! [`AssemblyError`](assembly_actor::AssemblyError)). Errors raised inside an entity
//! hook travel back through the framework and are recovered with their original type.
//!
//! ### Context Injection
//! Dependencies are handed to an actor when it starts running. The Order actor gets
//! the [`AuditSink`](audit::AuditSink); the Assembly actor gets an `OrderRegistry`
//! so a commit can merge the finished pancake into its order.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the generic `ResourceActor<T>`, its client and the `MockClient`.
//! - [`model`]: ingredients, items, orders and assembly sessions.
//! - [`order_actor`], [`assembly_actor`]: the two actors built on the framework.
//! - [`clients`]: the typed operation surface.
//! - [`audit`]: structured audit facts and their sinks.
//! - [`config`], [`lifecycle`]: runtime settings, startup and shutdown.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod assembly_actor;
pub mod audit;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
