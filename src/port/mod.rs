//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────────────────┐
//!        │  Application (service)   │
//!        │   Domain + Port          │
//!        └────────────┬─────────────┘
//!                     │
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//!   ┌─────────────┐       ┌─────────────┐
//!   │  In-memory  │       │   SQLite    │
//!   │    Store    │       │    Store    │
//!   └─────────────┘       └─────────────┘
//! ```

pub mod outbound;

pub use outbound::store::{BasketList, BasketStore, StoreProvider};
