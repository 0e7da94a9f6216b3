//! Outbound adapters (driven side): storage implementations.

pub mod memory;
pub mod sqlite;
