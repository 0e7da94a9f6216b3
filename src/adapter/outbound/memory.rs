//! In-memory basket storage for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::domain::id::{BasketId, ItemRef, OwnerId};
use crate::error::Result;
use crate::port::outbound::store::{BasketList, BasketStore, StoreProvider};

#[derive(Debug, Default)]
struct Records {
    list: BasketList,
    data: HashMap<BasketId, Vec<ItemRef>>,
}

/// Baskets of a single owner, kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBasketStore {
    records: RwLock<Records>,
}

impl InMemoryBasketStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of baskets with stored contents.
    #[must_use]
    pub fn stored_baskets(&self) -> usize {
        self.records.read().data.len()
    }
}

impl BasketStore for InMemoryBasketStore {
    fn load_basket_list(&self) -> Result<BasketList> {
        Ok(self.records.read().list.clone())
    }

    fn save_basket_list(&self, list: &BasketList) -> Result<()> {
        self.records.write().list = list.clone();
        Ok(())
    }

    fn load_basket_data(&self, basket: BasketId) -> Result<Vec<ItemRef>> {
        Ok(self
            .records
            .read()
            .data
            .get(&basket)
            .cloned()
            .unwrap_or_default())
    }

    fn save_basket_data(&self, basket: BasketId, data: &[ItemRef]) -> Result<()> {
        let mut records = self.records.write();
        if data.is_empty() {
            records.data.remove(&basket);
        } else {
            records.data.insert(basket, data.to_vec());
        }
        Ok(())
    }
}

/// Hands out one shared in-memory store per owner.
///
/// Stores live as long as the provider, so a collection reopened for the
/// same owner sees earlier writes.
#[derive(Debug, Default)]
pub struct InMemoryStoreProvider {
    stores: Mutex<HashMap<OwnerId, Arc<InMemoryBasketStore>>>,
}

impl InMemoryStoreProvider {
    /// Create a provider with no owners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The store of `owner`, created on first use.
    #[must_use]
    pub fn store(&self, owner: OwnerId) -> Arc<InMemoryBasketStore> {
        Arc::clone(self.stores.lock().entry(owner).or_default())
    }
}

impl StoreProvider for InMemoryStoreProvider {
    fn open(&self, owner: OwnerId) -> Result<Arc<dyn BasketStore>> {
        Ok(self.store(owner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_records_load_as_empty() {
        let store = InMemoryBasketStore::new();
        assert!(store.load_basket_list().unwrap().is_empty());
        assert!(store.load_basket_data(3).unwrap().is_empty());
    }

    #[test]
    fn saving_empty_data_drops_the_record() {
        let store = InMemoryBasketStore::new();
        store.save_basket_data(2, &[1, 2]).unwrap();
        assert_eq!(store.stored_baskets(), 1);

        store.save_basket_data(2, &[]).unwrap();
        assert_eq!(store.stored_baskets(), 0);
    }

    #[test]
    fn provider_isolates_owners() {
        let provider = InMemoryStoreProvider::new();
        provider.open(1).unwrap().save_basket_data(1, &[10]).unwrap();

        assert_eq!(provider.open(1).unwrap().load_basket_data(1).unwrap(), vec![10]);
        assert!(provider.open(2).unwrap().load_basket_data(1).unwrap().is_empty());
    }
}
