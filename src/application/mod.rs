//! Application layer: entitlement resolution and the basket service.

pub mod service;
pub mod settings;

pub use service::BasketService;
pub use settings::BasketSettings;
