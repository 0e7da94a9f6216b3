//! Basket domain: baskets, basket collections, and entitlement rules.

pub mod basket;
pub mod baskets;
pub mod error;
pub mod id;
pub mod identity;
pub mod naming;

pub use basket::Basket;
pub use baskets::Baskets;
pub use error::BasketError;
pub use id::{BasketId, ItemRef, OwnerId, DEFAULT_ID};
pub use identity::{Entitlement, Identity, RoleLimits};
pub use naming::{default_basket_name, BasketNamer, TemplateNamer};
