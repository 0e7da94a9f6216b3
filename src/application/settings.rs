//! Immutable settings consumed by the basket service.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::identity::RoleLimits;
use crate::domain::naming::{BasketNamer, TemplateNamer};

/// Resolved basket settings.
#[derive(Clone)]
pub struct BasketSettings {
    /// Roles allowed to have baskets, with their limits.
    pub roles: IndexMap<String, RoleLimits>,
    /// Item types that may be added to a basket.
    pub types: Vec<String>,
    /// Names given to baskets created without one.
    pub namer: Arc<dyn BasketNamer>,
    /// Refuse to create baskets beyond the entitled maximum.
    pub enforce_max_baskets: bool,
}

impl BasketSettings {
    /// Settings granting `limits` to a single role.
    pub fn for_role(role: impl Into<String>, limits: RoleLimits) -> Self {
        let mut settings = Self::default();
        settings.roles.insert(role.into(), limits);
        settings
    }
}

impl Default for BasketSettings {
    fn default() -> Self {
        Self {
            roles: IndexMap::new(),
            types: Vec::new(),
            namer: Arc::new(TemplateNamer::default()),
            enforce_max_baskets: false,
        }
    }
}

impl std::fmt::Debug for BasketSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasketSettings")
            .field("roles", &self.roles)
            .field("types", &self.types)
            .field("enforce_max_baskets", &self.enforce_max_baskets)
            .finish_non_exhaustive()
    }
}
