//! An owner's collection of named baskets.
//!
//! [`Baskets`] keeps the ordered list of basket numbers and names, the
//! currently selected basket, and one live [`Basket`] per number. The
//! default basket ([`DEFAULT_ID`]) always exists: removing it only empties
//! it. Every structural change is persisted immediately and only takes
//! effect in memory once the store accepted it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::basket::{Basket, DEFAULT_CAPACITY};
use super::error::BasketError;
use super::id::{BasketId, DEFAULT_ID};
use super::naming::{BasketNamer, TemplateNamer};
use crate::error::{Error, Result};
use crate::port::outbound::store::{BasketList, BasketStore};

/// Basket count used when the caller has no specific limit.
pub const DEFAULT_MAX_BASKETS: usize = 1;

/// The baskets of one owner.
pub struct Baskets {
    store: Arc<dyn BasketStore>,
    namer: Arc<dyn BasketNamer>,
    max_baskets: usize,
    basket_capacity: usize,
    enforce_max_baskets: bool,
    list: IndexMap<BasketId, String>,
    current: BasketId,
    next_id: BasketId,
    instances: HashMap<BasketId, Basket>,
}

impl Baskets {
    /// Load an owner's baskets using the standard basket names.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::InvalidMaxBaskets`] or
    /// [`BasketError::InvalidCapacity`] if a limit is zero, the storage
    /// error if the list cannot be loaded, or [`Error::Parse`] if the stored
    /// list already uses `BasketId::MAX`.
    pub fn new(
        store: Arc<dyn BasketStore>,
        max_baskets: usize,
        basket_capacity: usize,
    ) -> Result<Self> {
        Self::with_namer(
            store,
            max_baskets,
            basket_capacity,
            Arc::new(TemplateNamer::default()),
        )
    }

    /// Load an owner's baskets with the default limits.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the list cannot be loaded.
    pub fn with_defaults(store: Arc<dyn BasketStore>) -> Result<Self> {
        Self::new(store, DEFAULT_MAX_BASKETS, DEFAULT_CAPACITY)
    }

    /// Load an owner's baskets, naming unnamed baskets with `namer`.
    ///
    /// # Errors
    ///
    /// Same as [`Baskets::new`].
    pub fn with_namer(
        store: Arc<dyn BasketStore>,
        max_baskets: usize,
        basket_capacity: usize,
        namer: Arc<dyn BasketNamer>,
    ) -> Result<Self> {
        if max_baskets < 1 {
            return Err(BasketError::InvalidMaxBaskets.into());
        }
        if basket_capacity < 1 {
            return Err(BasketError::InvalidCapacity.into());
        }

        let stored = store.load_basket_list()?;
        let (list, current) = Self::normalize(stored, namer.as_ref());
        let highest = list.keys().copied().max().unwrap_or(DEFAULT_ID);
        let next_id = highest
            .checked_add(1)
            .ok_or_else(|| Error::Parse(format!("basket number {highest} is out of range")))?;

        Ok(Self {
            store,
            namer,
            max_baskets,
            basket_capacity,
            enforce_max_baskets: false,
            list,
            current,
            next_id,
            instances: HashMap::new(),
        })
    }

    /// Refuse to create baskets beyond [`Baskets::max_baskets`].
    ///
    /// Off by default: creation is permissive unless a host opts in.
    #[must_use]
    pub fn with_limit_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_max_baskets = enforce;
        self
    }

    /// Turn a stored record into a list that contains the default basket and
    /// a selection that points into the list.
    fn normalize(
        stored: BasketList,
        namer: &dyn BasketNamer,
    ) -> (IndexMap<BasketId, String>, BasketId) {
        let mut list = stored.baskets;
        if !list.contains_key(&DEFAULT_ID) {
            let mut seeded = IndexMap::with_capacity(list.len() + 1);
            seeded.insert(DEFAULT_ID, namer.default_name(DEFAULT_ID));
            seeded.extend(list);
            list = seeded;
        }

        let mut current = stored.current.unwrap_or(DEFAULT_ID);
        if !list.contains_key(&current) {
            warn!(current, "Selected basket no longer exists, falling back to default");
            current = DEFAULT_ID;
        }

        (list, current)
    }

    /// Save `list` and `current`, adopting them only once the store
    /// accepted the record.
    fn commit(&mut self, list: IndexMap<BasketId, String>, current: BasketId) -> Result<()> {
        let record = BasketList {
            baskets: list,
            current: (current != DEFAULT_ID).then_some(current),
        };
        self.store.save_basket_list(&record)?;
        self.list = record.baskets;
        self.current = current;
        Ok(())
    }

    fn check(&self, id: BasketId) -> Result<()> {
        if self.has_basket(id) {
            Ok(())
        } else {
            Err(BasketError::BasketNotFound { id }.into())
        }
    }

    /// Maximum number of baskets the owner may have.
    #[must_use]
    pub fn max_baskets(&self) -> usize {
        self.max_baskets
    }

    /// Capacity given to every basket of this collection.
    #[must_use]
    pub fn basket_capacity(&self) -> usize {
        self.basket_capacity
    }

    /// Basket numbers and names, in list order.
    #[must_use]
    pub fn list(&self) -> &IndexMap<BasketId, String> {
        &self.list
    }

    /// Number of baskets.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list.len()
    }

    /// Iterate over `(number, name)` pairs in list order.
    pub fn iter(&self) -> impl Iterator<Item = (BasketId, &str)> + '_ {
        self.list.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Whether basket `id` exists.
    #[must_use]
    pub fn has_basket(&self, id: BasketId) -> bool {
        self.list.contains_key(&id)
    }

    /// Return basket `id`.
    ///
    /// The basket is loaded on first access and cached; later calls return
    /// the same instance, so unsaved state is never lost between lookups.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::BasketNotFound`] if `id` is not in the list, or
    /// the storage error if the basket cannot be loaded.
    pub fn basket(&mut self, id: BasketId) -> Result<&mut Basket> {
        self.check(id)?;

        match self.instances.entry(id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let basket = Basket::new(id, Arc::clone(&self.store), self.basket_capacity)?;
                Ok(entry.insert(basket))
            }
        }
    }

    /// Return the currently selected basket.
    ///
    /// # Errors
    ///
    /// Same as [`Baskets::basket`].
    pub fn current_basket(&mut self) -> Result<&mut Basket> {
        self.basket(self.current)
    }

    /// Append a basket to the list and return its number.
    ///
    /// Numbers are never reused within the lifetime of this collection. An
    /// empty `name` is replaced by the default name for the new number.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::TooManyBaskets`] when limit enforcement is on
    /// and the collection is full, [`BasketError::NumbersExhausted`] once
    /// `BasketId::MAX` has been handed out, or the storage error if the list
    /// cannot be saved. The collection is unchanged on error.
    pub fn create_basket(&mut self, name: &str) -> Result<BasketId> {
        if self.enforce_max_baskets && self.count() >= self.max_baskets {
            return Err(BasketError::TooManyBaskets {
                max: self.max_baskets,
            }
            .into());
        }

        let id = self.next_id;
        let following = id.checked_add(1).ok_or(BasketError::NumbersExhausted)?;

        let name = if name.is_empty() {
            self.namer.default_name(id)
        } else {
            name.to_string()
        };
        let mut list = self.list.clone();
        list.insert(id, name);
        self.commit(list, self.current)?;
        self.next_id = following;

        debug!(basket = id, count = self.count(), "Basket created");
        Ok(id)
    }

    /// Remove basket `id` and delete its contents.
    ///
    /// The default basket stays in the list and is only emptied. Removing the
    /// selected basket selects the default one.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::BasketNotFound`] if `id` is unknown, or the
    /// storage error if the change cannot be saved. The contents are deleted
    /// before the list is saved, so a failed list save leaves an empty
    /// basket in place.
    pub fn remove_basket(&mut self, id: BasketId) -> Result<()> {
        self.basket(id)?.clear()?;

        let mut list = self.list.clone();
        let mut current = self.current;
        if id != DEFAULT_ID {
            list.shift_remove(&id);
            if current == id {
                current = DEFAULT_ID;
            }
        }
        self.commit(list, current)?;
        self.instances.remove(&id);

        debug!(basket = id, count = self.count(), "Basket removed");
        Ok(())
    }

    /// Rename basket `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::BasketNotFound`] if `id` is unknown, or the
    /// storage error if the list cannot be saved.
    pub fn rename_basket(&mut self, id: BasketId, new_name: impl Into<String>) -> Result<()> {
        self.check(id)?;
        let mut list = self.list.clone();
        list.insert(id, new_name.into());
        self.commit(list, self.current)?;

        debug!(basket = id, "Basket renamed");
        Ok(())
    }

    /// Number of the selected basket.
    #[must_use]
    pub fn current(&self) -> BasketId {
        self.current
    }

    /// Select basket `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::BasketNotFound`] if `id` is unknown, or the
    /// storage error if the list cannot be saved.
    pub fn set_current(&mut self, id: BasketId) -> Result<()> {
        self.check(id)?;
        self.commit(self.list.clone(), id)?;

        debug!(basket = id, "Selected basket changed");
        Ok(())
    }

    /// Default name for basket `id`, as produced by this collection's namer.
    #[must_use]
    pub fn default_basket_name(&self, id: BasketId) -> String {
        self.namer.default_name(id)
    }
}

impl<'a> IntoIterator for &'a Baskets {
    type Item = (&'a BasketId, &'a String);
    type IntoIter = indexmap::map::Iter<'a, BasketId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl fmt::Debug for Baskets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Baskets")
            .field("list", &self.list)
            .field("current", &self.current)
            .field("max_baskets", &self.max_baskets)
            .field("basket_capacity", &self.basket_capacity)
            .finish_non_exhaustive()
    }
}
