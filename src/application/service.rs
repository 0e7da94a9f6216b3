//! Per-identity basket resolution.
//!
//! [`BasketService`] decides whether the acting identity may have baskets
//! and, if so, opens its [`Baskets`] lazily on first use. The result, a
//! collection or "no basket", is cached until [`BasketService::reset`] is
//! called or the identity changes.

use std::sync::Arc;

use tracing::{debug, info};

use super::settings::BasketSettings;
use crate::domain::basket::Basket;
use crate::domain::baskets::Baskets;
use crate::domain::id::ItemRef;
use crate::domain::identity::{Entitlement, Identity};
use crate::error::Result;
use crate::port::outbound::store::StoreProvider;

/// Resolves and holds the baskets of the acting identity.
pub struct BasketService {
    settings: BasketSettings,
    provider: Arc<dyn StoreProvider>,
    identity: Identity,
    /// `None` until resolved; `Some(None)` when the identity has no baskets.
    resolved: Option<Option<Baskets>>,
}

impl BasketService {
    /// Create a service for `identity`. Nothing is loaded until first use.
    pub fn new(
        settings: BasketSettings,
        provider: Arc<dyn StoreProvider>,
        identity: Identity,
    ) -> Self {
        Self {
            settings,
            provider,
            identity,
            resolved: None,
        }
    }

    /// Settings this service was built with.
    #[must_use]
    pub fn settings(&self) -> &BasketSettings {
        &self.settings
    }

    /// The acting identity.
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Replace the acting identity and drop the cached baskets.
    pub fn switch_identity(&mut self, identity: Identity) {
        self.identity = identity;
        self.reset();
    }

    /// Drop the cached baskets; the next access resolves them again.
    pub fn reset(&mut self) {
        self.resolved = None;
    }

    /// Whether the acting identity may have baskets.
    ///
    /// # Errors
    /// Returns the storage error if the baskets cannot be loaded.
    pub fn is_active(&mut self) -> Result<bool> {
        Ok(self.baskets()?.is_some())
    }

    /// Maximum number of baskets, or 0 without entitlement.
    ///
    /// # Errors
    /// Returns the storage error if the baskets cannot be loaded.
    pub fn max_baskets(&mut self) -> Result<usize> {
        Ok(self.baskets()?.map_or(0, |baskets| baskets.max_baskets()))
    }

    /// Basket capacity, or 0 without entitlement.
    ///
    /// # Errors
    /// Returns the storage error if the baskets cannot be loaded.
    pub fn basket_capacity(&mut self) -> Result<usize> {
        Ok(self
            .baskets()?
            .map_or(0, |baskets| baskets.basket_capacity()))
    }

    /// The baskets of the acting identity, or `None` without entitlement.
    ///
    /// # Errors
    /// Returns the storage error if the baskets cannot be loaded. A failed
    /// resolution is not cached.
    pub fn baskets(&mut self) -> Result<Option<&mut Baskets>> {
        if self.resolved.is_none() {
            let baskets = self.resolve()?;
            self.resolved = Some(baskets);
        }

        Ok(self.resolved.as_mut().and_then(Option::as_mut))
    }

    /// The selected basket of the acting identity, or `None` without
    /// entitlement.
    ///
    /// # Errors
    /// Returns the storage error if the basket cannot be loaded.
    pub fn basket(&mut self) -> Result<Option<&mut Basket>> {
        match self.baskets()? {
            Some(baskets) => baskets.current_basket().map(Some),
            None => Ok(None),
        }
    }

    /// Item IDs a search restricted to the basket should match.
    ///
    /// Empty when there is no basket, so the search matches nothing.
    ///
    /// # Errors
    /// Returns the storage error if the basket cannot be loaded.
    pub fn selection_filter(&mut self) -> Result<Vec<ItemRef>> {
        Ok(self.basket()?.map(|basket| basket.contents()).unwrap_or_default())
    }

    /// Whether items of type `item_type` may be added to a basket.
    #[must_use]
    pub fn is_supported_type(&self, item_type: &str) -> bool {
        self.settings.types.iter().any(|t| t == item_type)
    }

    fn resolve(&self) -> Result<Option<Baskets>> {
        let Some(entitlement) = Entitlement::resolve(&self.settings.roles, &self.identity) else {
            debug!(
                user = self.identity.id,
                authenticated = self.identity.authenticated,
                "No basket entitlement"
            );
            return Ok(None);
        };

        info!(
            user = entitlement.owner,
            max_baskets = entitlement.max_baskets,
            basket_capacity = entitlement.basket_capacity,
            "Basket entitlement resolved"
        );

        let store = self.provider.open(entitlement.owner)?;
        let baskets = Baskets::with_namer(
            store,
            entitlement.max_baskets,
            entitlement.basket_capacity,
            Arc::clone(&self.settings.namer),
        )?
        .with_limit_enforcement(self.settings.enforce_max_baskets);

        Ok(Some(baskets))
    }
}
