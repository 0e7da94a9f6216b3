//! SQLite user attribute store and the basket storage built on it.
//!
//! Baskets are kept as per-user attributes (one row per user and key):
//!
//! - `_basketry-baskets` holds the basket list as a JSON record
//! - `_basketry-basket-{id}` holds a basket's contents as `"1 2 3"`
//!
//! An empty basket has no row at all, so removed or cleared baskets do not
//! leave empty keys behind.

use std::sync::Arc;

use chrono::Utc;
use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::UserMetaRow;
use crate::adapter::outbound::sqlite::database::schema::user_meta;
use crate::domain::id::{BasketId, ItemRef, OwnerId};
use crate::error::{Error, Result};
use crate::port::outbound::store::{BasketList, BasketStore, StoreProvider};

/// Attribute key of the basket list.
pub const BASKET_LIST_KEY: &str = "_basketry-baskets";

/// Prefix of the attribute keys holding basket contents.
pub const BASKET_KEY_PREFIX: &str = "_basketry-basket-";

/// Key/value attributes attached to users.
#[derive(Clone)]
pub struct SqliteUserMeta {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteUserMeta {
    /// Create a user attribute store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Read attribute `key` of `user`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be queried.
    pub fn get(&self, user: OwnerId, key: &str) -> Result<Option<String>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        user_meta::table
            .find((user, key))
            .select(user_meta::meta_value)
            .first::<String>(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Set attribute `key` of `user`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the row cannot be written.
    pub fn set(&self, user: OwnerId, key: &str, value: String) -> Result<()> {
        let row = UserMetaRow {
            user_id: user,
            meta_key: key.to_string(),
            meta_value: value,
            updated_at: Utc::now().to_rfc3339(),
        };
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::replace_into(user_meta::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    /// Delete attribute `key` of `user`. Returns true if it existed.
    ///
    /// # Errors
    /// Returns an error if the row cannot be deleted.
    pub fn delete(&self, user: OwnerId, key: &str) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(user_meta::table.find((user, key)))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }

    /// Number of attributes stored for `user`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be queried.
    pub fn count(&self, user: OwnerId) -> Result<i64> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        user_meta::table
            .filter(user_meta::user_id.eq(user))
            .count()
            .get_result(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Basket storage for one user, backed by [`SqliteUserMeta`].
#[derive(Clone)]
pub struct UserMetaBasketStore {
    meta: SqliteUserMeta,
    owner: OwnerId,
}

impl UserMetaBasketStore {
    /// Create the basket store of `owner`.
    #[must_use]
    pub fn new(pool: DbPool, owner: OwnerId) -> Self {
        Self {
            meta: SqliteUserMeta::new(pool),
            owner,
        }
    }

    fn basket_key(basket: BasketId) -> String {
        format!("{BASKET_KEY_PREFIX}{basket}")
    }

    /// Encode basket contents as space-separated integers.
    #[must_use]
    pub fn encode_refs(data: &[ItemRef]) -> String {
        data.iter()
            .map(ItemRef::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decode basket contents written by [`UserMetaBasketStore::encode_refs`].
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if a token is not an integer.
    pub fn decode_refs(value: &str) -> Result<Vec<ItemRef>> {
        value
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<ItemRef>()
                    .map_err(|e| Error::Parse(format!("basket item '{token}': {e}")))
            })
            .collect()
    }
}

impl BasketStore for UserMetaBasketStore {
    fn load_basket_list(&self) -> Result<BasketList> {
        match self.meta.get(self.owner, BASKET_LIST_KEY)? {
            Some(value) if !value.is_empty() => {
                serde_json::from_str(&value).map_err(|e| Error::Parse(e.to_string()))
            }
            _ => Ok(BasketList::default()),
        }
    }

    fn save_basket_list(&self, list: &BasketList) -> Result<()> {
        let value = serde_json::to_string(list)?;
        self.meta.set(self.owner, BASKET_LIST_KEY, value)
    }

    fn load_basket_data(&self, basket: BasketId) -> Result<Vec<ItemRef>> {
        match self.meta.get(self.owner, &Self::basket_key(basket))? {
            Some(value) => Self::decode_refs(&value),
            None => Ok(Vec::new()),
        }
    }

    fn save_basket_data(&self, basket: BasketId, data: &[ItemRef]) -> Result<()> {
        let key = Self::basket_key(basket);
        if data.is_empty() {
            self.meta.delete(self.owner, &key)?;
            return Ok(());
        }

        self.meta.set(self.owner, &key, Self::encode_refs(data))
    }
}

/// Opens [`UserMetaBasketStore`]s on a shared connection pool.
#[derive(Clone)]
pub struct SqliteStoreProvider {
    pool: DbPool,
}

impl SqliteStoreProvider {
    /// Create a provider with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl StoreProvider for SqliteStoreProvider {
    fn open(&self, owner: OwnerId) -> Result<Arc<dyn BasketStore>> {
        Ok(Arc::new(UserMetaBasketStore::new(self.pool.clone(), owner)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::open_database;
    use tempfile::TempDir;

    fn setup_test_db() -> (TempDir, DbPool) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let pool = open_database(dir.path().join("baskets.db")).expect("Failed to open database");
        (dir, pool)
    }

    // -------------------------------------------------------------------------
    // User attributes
    // -------------------------------------------------------------------------

    #[test]
    fn meta_set_get_delete() {
        let (_dir, pool) = setup_test_db();
        let meta = SqliteUserMeta::new(pool);

        assert_eq!(meta.get(1, "k").unwrap(), None);
        meta.set(1, "k", "v1".to_string()).unwrap();
        meta.set(1, "k", "v2".to_string()).unwrap();
        assert_eq!(meta.get(1, "k").unwrap().as_deref(), Some("v2"));
        assert_eq!(meta.count(1).unwrap(), 1);

        assert!(meta.delete(1, "k").unwrap());
        assert!(!meta.delete(1, "k").unwrap()); // Already deleted
        assert_eq!(meta.get(1, "k").unwrap(), None);
    }

    #[test]
    fn meta_is_scoped_per_user() {
        let (_dir, pool) = setup_test_db();
        let meta = SqliteUserMeta::new(pool);

        meta.set(1, "k", "one".to_string()).unwrap();
        meta.set(2, "k", "two".to_string()).unwrap();

        assert_eq!(meta.get(1, "k").unwrap().as_deref(), Some("one"));
        assert_eq!(meta.get(2, "k").unwrap().as_deref(), Some("two"));
    }

    // -------------------------------------------------------------------------
    // Basket records
    // -------------------------------------------------------------------------

    #[test]
    fn basket_data_is_stored_as_delimited_string() {
        let (_dir, pool) = setup_test_db();
        let store = UserMetaBasketStore::new(pool.clone(), 456);

        store.save_basket_data(3, &[10, 2, 33]).unwrap();

        let raw = SqliteUserMeta::new(pool).get(456, "_basketry-basket-3").unwrap();
        assert_eq!(raw.as_deref(), Some("10 2 33"));
        assert_eq!(store.load_basket_data(3).unwrap(), vec![10, 2, 33]);
    }

    #[test]
    fn empty_basket_data_removes_the_row() {
        let (_dir, pool) = setup_test_db();
        let store = UserMetaBasketStore::new(pool.clone(), 456);
        let meta = SqliteUserMeta::new(pool);

        store.save_basket_data(1, &[1]).unwrap();
        assert_eq!(meta.count(456).unwrap(), 1);

        store.save_basket_data(1, &[]).unwrap();
        assert_eq!(meta.count(456).unwrap(), 0);
        assert!(store.load_basket_data(1).unwrap().is_empty());
    }

    #[test]
    fn basket_list_roundtrip_keeps_order_and_selection() {
        let (_dir, pool) = setup_test_db();
        let store = UserMetaBasketStore::new(pool, 456);

        let mut list = BasketList::default();
        list.baskets.insert(1, "My Selection".to_string());
        list.baskets.insert(5, "later".to_string());
        list.baskets.insert(3, "earlier".to_string());
        list.current = Some(5);

        store.save_basket_list(&list).unwrap();
        assert_eq!(store.load_basket_list().unwrap(), list);
    }

    #[test]
    fn missing_list_loads_as_empty() {
        let (_dir, pool) = setup_test_db();
        let store = UserMetaBasketStore::new(pool, 456);
        assert!(store.load_basket_list().unwrap().is_empty());
    }

    #[test]
    fn corrupt_basket_data_is_a_parse_error() {
        let (_dir, pool) = setup_test_db();
        SqliteUserMeta::new(pool.clone())
            .set(456, "_basketry-basket-1", "1 two 3".to_string())
            .unwrap();

        let store = UserMetaBasketStore::new(pool, 456);
        assert!(matches!(store.load_basket_data(1), Err(Error::Parse(_))));
    }

    #[test]
    fn decode_tolerates_extra_whitespace() {
        assert_eq!(
            UserMetaBasketStore::decode_refs(" 1  2 3 ").unwrap(),
            vec![1, 2, 3]
        );
        assert!(UserMetaBasketStore::decode_refs("").unwrap().is_empty());
    }
}
