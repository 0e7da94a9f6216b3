//! Caller identity and basket entitlement.
//!
//! The host supplies an explicit [`Identity`] for every request. Its
//! entitlement is the per-role limits merged by taking the maximum of each
//! limit across all roles held: with `role1 = 5 baskets x 10` and
//! `role2 = 3 baskets x 100` the caller gets 5 baskets of 100.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::id::OwnerId;

/// Who is making the request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    /// User ID, meaningful only when authenticated.
    pub id: OwnerId,
    /// Whether the caller is logged in.
    pub authenticated: bool,
    /// Role tags held by the caller.
    pub roles: Vec<String>,
}

impl Identity {
    /// An unauthenticated caller. Never entitled to baskets.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated user holding `roles`.
    pub fn user<I, S>(id: OwnerId, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            authenticated: true,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Limits granted by one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleLimits {
    /// Maximum number of baskets.
    #[serde(default = "default_max_baskets")]
    pub max_baskets: i64,
    /// Maximum number of items per basket.
    #[serde(default = "default_basket_capacity")]
    pub basket_capacity: i64,
}

const fn default_max_baskets() -> i64 {
    1
}

const fn default_basket_capacity() -> i64 {
    100
}

impl Default for RoleLimits {
    fn default() -> Self {
        Self {
            max_baskets: default_max_baskets(),
            basket_capacity: default_basket_capacity(),
        }
    }
}

/// Resolved basket limits of an entitled owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    /// Owner the baskets belong to.
    pub owner: OwnerId,
    /// Merged maximum number of baskets, always `>= 1`.
    pub max_baskets: usize,
    /// Merged basket capacity, always `>= 1`.
    pub basket_capacity: usize,
}

impl Entitlement {
    /// Resolve the entitlement of `identity` against per-role limits.
    ///
    /// Returns `None` for anonymous callers, for callers with no configured
    /// role, and when either merged limit is not positive.
    #[must_use]
    pub fn resolve(roles: &IndexMap<String, RoleLimits>, identity: &Identity) -> Option<Self> {
        if !identity.authenticated {
            return None;
        }

        let (max_baskets, basket_capacity) = identity
            .roles
            .iter()
            .filter_map(|role| roles.get(role))
            .fold((0_i64, 0_i64), |(baskets, capacity), limits| {
                (
                    baskets.max(limits.max_baskets),
                    capacity.max(limits.basket_capacity),
                )
            });

        if max_baskets <= 0 || basket_capacity <= 0 {
            return None;
        }

        Some(Self {
            owner: identity.id,
            max_baskets: usize::try_from(max_baskets).ok()?,
            basket_capacity: usize::try_from(basket_capacity).ok()?,
        })
    }
}
