//! A single bounded, ordered basket of item references.
//!
//! A [`Basket`] never grows past `capacity` distinct references, kept in
//! first insertion order. Every mutation that changes the contents is
//! written through to the [`BasketStore`] immediately, and the in-memory
//! contents change only after the store accepted the write.
//!
//! Invalid references (`< 1`), duplicates and absent references are
//! filtered silently. Callers detect truncation by comparing the number of
//! references they asked to add with the number [`Basket::add`] returned.
//!
//! # Example
//!
//! ```
//! use basketry::adapter::outbound::memory::InMemoryBasketStore;
//! use basketry::domain::basket::Basket;
//! use std::sync::Arc;
//!
//! let mut basket = Basket::new(1, Arc::new(InMemoryBasketStore::new()), 2).unwrap();
//! assert_eq!(basket.add([1, 2, 3]).unwrap(), vec![1, 2]);
//! assert!(basket.is_full());
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::debug;

use super::error::BasketError;
use super::id::{is_valid_ref, BasketId, ItemRef};
use crate::error::Result;
use crate::port::outbound::store::BasketStore;

/// Capacity used when the caller has no specific limit.
pub const DEFAULT_CAPACITY: usize = 1234;

/// A bounded, duplicate-free, order-preserving set of item references.
pub struct Basket {
    id: BasketId,
    capacity: usize,
    contents: IndexSet<ItemRef>,
    store: Arc<dyn BasketStore>,
}

impl Basket {
    /// Load basket `id` from `store`.
    ///
    /// Stored contents are kept as they are, even when they exceed
    /// `capacity` (for example after a role's capacity was lowered). Such a
    /// basket reports [`Basket::is_full`] and accepts no new references until
    /// enough are removed; nothing is dropped on load.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::InvalidCapacity`] if `capacity` is zero, or the
    /// storage error if the contents cannot be loaded.
    pub fn new(id: BasketId, store: Arc<dyn BasketStore>, capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(BasketError::InvalidCapacity.into());
        }

        let contents: IndexSet<ItemRef> = store.load_basket_data(id)?.into_iter().collect();
        debug!(basket = id, items = contents.len(), capacity, "Basket loaded");

        Ok(Self {
            id,
            capacity,
            contents,
            store,
        })
    }

    /// Basket number.
    #[must_use]
    pub fn id(&self) -> BasketId {
        self.id
    }

    /// Add references in the given order.
    ///
    /// Invalid and already-present references are skipped. Processing stops
    /// as soon as the basket is full; the remaining references are dropped.
    /// Returns the references actually inserted, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the new contents cannot be saved. The
    /// basket is left unchanged in that case.
    pub fn add<I>(&mut self, refs: I) -> Result<Vec<ItemRef>>
    where
        I: IntoIterator<Item = ItemRef>,
    {
        let mut next = self.contents.clone();
        let mut added = Vec::new();
        for item in refs {
            if !is_valid_ref(item) || next.contains(&item) {
                continue;
            }
            if next.len() >= self.capacity {
                break;
            }
            next.insert(item);
            added.push(item);
        }

        if !added.is_empty() {
            self.commit(next)?;
            debug!(basket = self.id, added = added.len(), count = self.count(), "Refs added");
        }

        Ok(added)
    }

    /// Remove references.
    ///
    /// Invalid and absent references are skipped. Returns the references
    /// actually removed, in the order removal was requested.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the new contents cannot be saved. The
    /// basket is left unchanged in that case.
    pub fn remove<I>(&mut self, refs: I) -> Result<Vec<ItemRef>>
    where
        I: IntoIterator<Item = ItemRef>,
    {
        let mut next = self.contents.clone();
        let mut removed = Vec::new();
        for item in refs {
            if is_valid_ref(item) && next.shift_remove(&item) {
                removed.push(item);
            }
        }

        if !removed.is_empty() {
            self.commit(next)?;
            debug!(basket = self.id, removed = removed.len(), count = self.count(), "Refs removed");
        }

        Ok(removed)
    }

    /// Empty the basket and return its previous contents.
    ///
    /// An already empty basket is left untouched and nothing is saved.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the empty basket cannot be saved. The
    /// contents are kept in that case.
    pub fn clear(&mut self) -> Result<Vec<ItemRef>> {
        if self.contents.is_empty() {
            return Ok(Vec::new());
        }

        let previous = self.contents();
        self.commit(IndexSet::new())?;
        debug!(basket = self.id, cleared = previous.len(), "Basket cleared");

        Ok(previous)
    }

    /// Whether the basket contains `item`.
    #[must_use]
    pub fn has(&self, item: ItemRef) -> bool {
        self.contents.contains(&item)
    }

    /// Number of references in the basket.
    #[must_use]
    pub fn count(&self) -> usize {
        self.contents.len()
    }

    /// True when the basket holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// References in first insertion order.
    #[must_use]
    pub fn contents(&self) -> Vec<ItemRef> {
        self.contents.iter().copied().collect()
    }

    /// Maximum number of references the basket can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when no more references can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count() >= self.capacity()
    }

    /// Iterate over the current contents in insertion order.
    ///
    /// Every call starts a fresh pass over the state at that moment.
    pub fn iter(&self) -> impl Iterator<Item = ItemRef> + '_ {
        self.contents.iter().copied()
    }

    /// Save `next` and adopt it only once the store accepted it.
    fn commit(&mut self, next: IndexSet<ItemRef>) -> Result<()> {
        let data: Vec<ItemRef> = next.iter().copied().collect();
        self.store.save_basket_data(self.id, &data)?;
        self.contents = next;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Basket {
    type Item = ItemRef;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, ItemRef>>;

    fn into_iter(self) -> Self::IntoIter {
        self.contents.iter().copied()
    }
}

impl fmt::Debug for Basket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Basket")
            .field("id", &self.id)
            .field("capacity", &self.capacity)
            .field("contents", &self.contents)
            .finish_non_exhaustive()
    }
}
