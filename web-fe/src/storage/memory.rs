use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use super::{KeyValueStore, StorageTier, StoreError, StoreOp};

/// In-memory stand-in for a browser storage tier.
pub struct MemoryStore {
    tier: StorageTier,
    items: RefCell<HashMap<String, String>>,
    reject_set: RefCell<Option<String>>,
    blocked: Cell<bool>,
    mutations: Cell<usize>,
}

impl MemoryStore {
    pub fn new(tier: StorageTier) -> Self {
        Self {
            tier,
            items: RefCell::new(HashMap::new()),
            reject_set: RefCell::new(None),
            blocked: Cell::new(false),
            mutations: Cell::new(0),
        }
    }

    pub fn with_items(tier: StorageTier, items: &[(&str, &str)]) -> Self {
        let store = Self::new(tier);
        store.items.borrow_mut().extend(
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    /// Make every later `set` of `key` fail, like a full quota would.
    pub fn reject_writes_to(&self, key: &str) {
        *self.reject_set.borrow_mut() = Some(key.to_string());
    }

    /// Fail every operation, like a browser with storage disabled.
    pub fn block(&self) {
        self.blocked.set(true);
    }

    fn check_available(&self, op: StoreOp, key: &str) -> Result<(), StoreError> {
        if self.blocked.get() {
            return Err(StoreError::new(
                op,
                self.tier(),
                key,
                "SecurityError: The operation is insecure.",
            ));
        }
        Ok(())
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Number of successful set/remove calls.
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn tier(&self) -> StorageTier {
        self.tier
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available(StoreOp::Get, key)?;
        Ok(self.item(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_available(StoreOp::Set, key)?;
        if self.reject_set.borrow().as_deref() == Some(key) {
            return Err(StoreError::new(
                StoreOp::Set,
                self.tier(),
                key,
                "QuotaExceededError",
            ));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.mutations.set(self.mutations.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_available(StoreOp::Remove, key)?;
        self.items.borrow_mut().remove(key);
        self.mutations.set(self.mutations.get() + 1);
        Ok(())
    }
}
