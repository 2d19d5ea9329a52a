//! Query cache with snapshot-based optimistic mutation
//!
//! One typed slot per list view. Read paths fill a slot on miss; mutating
//! workflows either invalidate the affected slots after the store confirms,
//! or speculate into a slot first and restore the captured snapshot when
//! the remote call fails.

use std::sync::RwLock;

use shared::models::{BorrowTransaction, Category, Department, Employee, Product, SerialItem};
use shared::rpc::DashboardSummary;

/// Captured prior state of one slot.
///
/// Restoring is explicit; dropping the snapshot commits the speculation.
#[derive(Debug)]
pub struct Snapshot<T>(Option<T>);

/// A single cached view.
#[derive(Debug)]
pub struct CacheSlot<T> {
    inner: RwLock<Option<T>>,
}

impl<T> Default for CacheSlot<T> {
    fn default() -> Self {
        Self { inner: RwLock::new(None) }
    }
}

impl<T: Clone> CacheSlot<T> {
    /// Cached value, if the slot is filled
    pub fn get(&self) -> Option<T> {
        self.inner.read().unwrap().clone()
    }

    /// Fill the slot
    pub fn put(&self, value: T) {
        *self.inner.write().unwrap() = Some(value);
    }

    /// Mark the slot for re-fetch
    pub fn invalidate(&self) {
        *self.inner.write().unwrap() = None;
    }

    /// Capture the current state, then apply `f` to the cached value.
    ///
    /// An empty slot is captured as empty and `f` is not called — there is
    /// nothing to speculate on.
    pub fn speculate(&self, f: impl FnOnce(&mut T)) -> Snapshot<T> {
        let mut guard = self.inner.write().unwrap();
        let snapshot = Snapshot(guard.clone());
        if let Some(value) = guard.as_mut() {
            f(value);
        }
        snapshot
    }

    /// Roll the slot back to a captured snapshot
    pub fn restore(&self, snapshot: Snapshot<T>) {
        *self.inner.write().unwrap() = snapshot.0;
    }
}

/// All cached list views.
#[derive(Debug, Default)]
pub struct QueryCache {
    pub products: CacheSlot<Vec<Product>>,
    pub serials: CacheSlot<Vec<SerialItem>>,
    pub employees: CacheSlot<Vec<Employee>>,
    pub transactions: CacheSlot<Vec<BorrowTransaction>>,
    pub categories: CacheSlot<Vec<Category>>,
    pub departments: CacheSlot<Vec<Department>>,
    pub dashboard: CacheSlot<DashboardSummary>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Views affected by a successful product import
    pub fn invalidate_product_views(&self) {
        self.products.invalidate();
        self.serials.invalidate();
    }

    /// Views affected by a completed borrow/return mutation
    pub fn invalidate_transaction_views(&self) {
        self.serials.invalidate();
        self.transactions.invalidate();
        self.dashboard.invalidate();
    }
}
