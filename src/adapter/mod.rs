//! Adapters: concrete implementations of the ports.
//!
//! - [`inbound`] - Entry points that drive the service (controller, CLI)
//! - [`outbound`] - Storage backends (in-memory, SQLite)

pub mod inbound;
pub mod outbound;
