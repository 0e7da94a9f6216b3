//! Contract violations raised by the basket domain.
//!
//! These are programmer-facing errors: a capacity below one, an unknown
//! basket number, a collection that already holds its maximum number of
//! baskets. Malformed item references are never reported here; baskets
//! filter them out silently.
//!
//! # Examples
//!
//! ```
//! use basketry::adapter::outbound::memory::InMemoryBasketStore;
//! use basketry::domain::basket::Basket;
//! use basketry::domain::error::BasketError;
//! use basketry::error::Error;
//! use std::sync::Arc;
//!
//! let result = Basket::new(1, Arc::new(InMemoryBasketStore::new()), 0);
//! assert!(matches!(result, Err(Error::Basket(BasketError::InvalidCapacity))));
//! ```

use thiserror::Error;

use super::id::BasketId;

/// Errors that occur when basket invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BasketError {
    /// A basket must be able to hold at least one item.
    #[error("basketCapacity must be greater than 0")]
    InvalidCapacity,

    /// A collection must allow at least one basket.
    #[error("maxBaskets must be greater than 0")]
    InvalidMaxBaskets,

    /// The referenced basket is not in the owner's list.
    #[error("Basket {id} does not exist.")]
    BasketNotFound {
        /// The basket number that was requested.
        id: BasketId,
    },

    /// The collection already holds its maximum number of baskets.
    #[error("cannot create more than {max} baskets")]
    TooManyBaskets {
        /// The configured ceiling.
        max: usize,
    },

    /// Every basket number up to `BasketId::MAX` has been handed out.
    #[error("no basket numbers left")]
    NumbersExhausted,
}
