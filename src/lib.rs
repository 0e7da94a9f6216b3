//! Basketry - per-user item baskets.
//!
//! Authenticated users whose roles grant basket access get a numbered,
//! named collection of baskets. Each basket holds an ordered, duplicate-free,
//! capacity-bounded list of item IDs. One basket per user is selected and
//! the basket API acts on it.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - **`domain`** - [`Basket`](domain::Basket), [`Baskets`](domain::Baskets),
//!   entitlement rules and default basket names
//! - **`port`** - The [`BasketStore`](port::BasketStore) persistence contract
//! - **`adapter::outbound`** - In-memory and SQLite stores
//! - **`application`** - [`BasketService`](application::BasketService), which
//!   resolves the acting identity's baskets
//! - **`adapter::inbound`** - The JSON basket API controller and the CLI
//! - **`infrastructure`** - TOML configuration and logging
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use basketry::adapter::outbound::memory::InMemoryBasketStore;
//! use basketry::domain::Baskets;
//!
//! # fn main() -> basketry::error::Result<()> {
//! let mut baskets = Baskets::new(Arc::new(InMemoryBasketStore::new()), 3, 10)?;
//! let added = baskets.current_basket()?.add([10, 20, 10])?;
//! assert_eq!(added, vec![10, 20]);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
