//! Canonical settings and identities used across tests.

use crate::application::settings::BasketSettings;
use crate::domain::id::OwnerId;
use crate::domain::identity::{Identity, RoleLimits};

/// Role granted by [`settings`].
pub const SUBSCRIBER: &str = "subscriber";

/// Settings granting [`SUBSCRIBER`] `max_baskets` baskets of `capacity`.
pub fn settings(max_baskets: i64, capacity: i64) -> BasketSettings {
    BasketSettings::for_role(
        SUBSCRIBER,
        RoleLimits {
            max_baskets,
            basket_capacity: capacity,
        },
    )
}

/// An authenticated subscriber.
pub fn subscriber(id: OwnerId) -> Identity {
    Identity::user(id, [SUBSCRIBER])
}
