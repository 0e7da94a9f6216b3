//! Persistence ports for basket lists and basket contents.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::id::{BasketId, ItemRef, OwnerId};
use crate::error::Result;

/// Persisted form of an owner's basket list.
///
/// `current` carries the selected basket across save/load cycles. It is
/// `None` when the default basket is selected, which keeps the common
/// record compact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketList {
    /// Basket number to display name, in list order.
    pub baskets: IndexMap<BasketId, String>,
    /// Selected basket, omitted for the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<BasketId>,
}

impl BasketList {
    /// True when the record holds no baskets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.baskets.is_empty()
    }
}

/// Storage operations for one owner's baskets.
///
/// Implementations are scoped to a single owner. Loads never fail on
/// missing data: an unknown owner or basket yields an empty value.
/// Saves are full replacements, never merges.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Any I/O failure is returned as-is; callers do not retry
pub trait BasketStore: Send + Sync {
    /// Load the basket list, or an empty list if the owner has none.
    fn load_basket_list(&self) -> Result<BasketList>;

    /// Replace the stored basket list.
    fn save_basket_list(&self, list: &BasketList) -> Result<()>;

    /// Load the contents of a basket, or an empty vector if it is unknown.
    fn load_basket_data(&self, basket: BasketId) -> Result<Vec<ItemRef>>;

    /// Replace the contents of a basket.
    ///
    /// Saving an empty slice removes the stored record entirely.
    fn save_basket_data(&self, basket: BasketId, data: &[ItemRef]) -> Result<()>;
}

/// Opens the store holding a given owner's baskets.
pub trait StoreProvider: Send + Sync {
    /// Return the store scoped to `owner`.
    fn open(&self, owner: OwnerId) -> Result<Arc<dyn BasketStore>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_omitted_from_json() {
        let mut list = BasketList::default();
        list.baskets.insert(1, "My Selection".to_string());

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"{"baskets":{"1":"My Selection"}}"#);
    }

    #[test]
    fn json_preserves_list_order() {
        let json = r#"{"baskets":{"3":"c","1":"a","2":"b"},"current":3}"#;
        let list: BasketList = serde_json::from_str(json).unwrap();

        let ids: Vec<_> = list.baskets.keys().copied().collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(list.current, Some(3));
    }
}
