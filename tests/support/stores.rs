use std::sync::Arc;

use basketry::adapter::outbound::memory::InMemoryBasketStore;
use basketry::adapter::outbound::sqlite::database::connection::{open_database, DbPool};
use basketry::adapter::outbound::sqlite::store::UserMetaBasketStore;
use basketry::port::outbound::store::BasketStore;
use basketry::testkit::store::{FailingStore, RecordingStore};
use tempfile::TempDir;

/// Owner used by store fixtures.
pub const OWNER: i64 = 42;

/// Temporary SQLite database for integration tests.
pub struct TempDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let pool = open_database(dir.path().join("baskets.db")).expect("open database");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// A basket store under test, with whatever keeps it alive.
pub struct StoreFixture {
    pub name: &'static str,
    pub store: Arc<dyn BasketStore>,
    _db: Option<TempDb>,
}

impl StoreFixture {
    pub fn memory() -> Self {
        Self {
            name: "memory",
            store: Arc::new(InMemoryBasketStore::new()),
            _db: None,
        }
    }

    pub fn sqlite() -> Self {
        let db = TempDb::create();
        Self {
            name: "sqlite",
            store: Arc::new(UserMetaBasketStore::new(db.pool().clone(), OWNER)),
            _db: Some(db),
        }
    }

    /// Wrap the store so saves can be counted.
    pub fn recording(&self) -> Arc<RecordingStore> {
        Arc::new(RecordingStore::new(Arc::clone(&self.store)))
    }

    /// Wrap the store so loads and saves can be made to fail.
    pub fn failing(&self) -> Arc<FailingStore> {
        Arc::new(FailingStore::new(Arc::clone(&self.store)))
    }
}

/// One fixture per store implementation.
pub fn all_stores() -> Vec<StoreFixture> {
    vec![StoreFixture::memory(), StoreFixture::sqlite()]
}
