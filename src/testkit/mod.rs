//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`] - [`RecordingStore`](store::RecordingStore), a store wrapper
//!   that counts persistence calls, and
//!   [`FailingStore`](store::FailingStore), one that fails them on demand.
//! - [`domain`] - Canonical settings and identities.

pub mod domain;
pub mod store;
