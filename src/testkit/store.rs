//! Store wrappers that record or fail persistence calls.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::id::{BasketId, ItemRef};
use crate::error::{Error, Result};
use crate::port::outbound::store::{BasketList, BasketStore};

/// Delegates to an inner store and counts every save.
pub struct RecordingStore {
    inner: Arc<dyn BasketStore>,
    list_saves: AtomicUsize,
    data_saves: AtomicUsize,
}

impl RecordingStore {
    pub fn new(inner: Arc<dyn BasketStore>) -> Self {
        Self {
            inner,
            list_saves: AtomicUsize::new(0),
            data_saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save_basket_list` calls so far.
    pub fn list_saves(&self) -> usize {
        self.list_saves.load(Ordering::SeqCst)
    }

    /// Number of `save_basket_data` calls so far.
    pub fn data_saves(&self) -> usize {
        self.data_saves.load(Ordering::SeqCst)
    }

    /// Total number of saves.
    pub fn saves(&self) -> usize {
        self.list_saves() + self.data_saves()
    }
}

impl BasketStore for RecordingStore {
    fn load_basket_list(&self) -> Result<BasketList> {
        self.inner.load_basket_list()
    }

    fn save_basket_list(&self, list: &BasketList) -> Result<()> {
        self.list_saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save_basket_list(list)
    }

    fn load_basket_data(&self, id: BasketId) -> Result<Vec<ItemRef>> {
        self.inner.load_basket_data(id)
    }

    fn save_basket_data(&self, id: BasketId, data: &[ItemRef]) -> Result<()> {
        self.data_saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save_basket_data(id, data)
    }
}

/// Message carried by every error [`FailingStore`] returns.
pub const STORAGE_FAILURE: &str = "disk I/O error";

/// Delegates to an inner store until told to fail.
///
/// Failing calls return `Error::Database(STORAGE_FAILURE)` and never reach
/// the inner store, so it keeps the last state that was accepted.
pub struct FailingStore {
    inner: Arc<dyn BasketStore>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl FailingStore {
    pub fn new(inner: Arc<dyn BasketStore>) -> Self {
        Self {
            inner,
            fail_loads: AtomicBool::new(false),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every load fail (or succeed again).
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make every save fail (or succeed again).
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool) -> Result<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(Error::Database(STORAGE_FAILURE.to_string()));
        }
        Ok(())
    }
}

impl BasketStore for FailingStore {
    fn load_basket_list(&self) -> Result<BasketList> {
        Self::check(&self.fail_loads)?;
        self.inner.load_basket_list()
    }

    fn save_basket_list(&self, list: &BasketList) -> Result<()> {
        Self::check(&self.fail_saves)?;
        self.inner.save_basket_list(list)
    }

    fn load_basket_data(&self, id: BasketId) -> Result<Vec<ItemRef>> {
        Self::check(&self.fail_loads)?;
        self.inner.load_basket_data(id)
    }

    fn save_basket_data(&self, id: BasketId, data: &[ItemRef]) -> Result<()> {
        Self::check(&self.fail_saves)?;
        self.inner.save_basket_data(id, data)
    }
}
