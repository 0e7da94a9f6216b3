//! SQLite persistence adapters.
//!
//! Provides a user attribute table and the durable basket storage built on
//! it, using Diesel ORM.

pub mod database;
pub mod store;
