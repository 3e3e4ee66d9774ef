use std::fmt;

use thiserror::Error;
use wasm_bindgen::JsValue;

#[cfg(test)]
mod memory;
#[cfg(test)]
pub use memory::MemoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageTier {
    /// `localStorage`, survives restarts.
    Durable,
    /// `sessionStorage`, cleared with the tab.
    Session,
}

impl fmt::Display for StorageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageTier::Durable => write!(f, "durable"),
            StorageTier::Session => write!(f, "session"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Get,
    Set,
    Remove,
}

impl fmt::Display for StoreOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOp::Get => write!(f, "get"),
            StoreOp::Set => write!(f, "set"),
            StoreOp::Remove => write!(f, "remove"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{op} `{key}` on {tier} storage failed: {reason}")]
pub struct StoreError {
    pub op: StoreOp,
    pub tier: StorageTier,
    pub key: String,
    pub reason: String,
}

impl StoreError {
    pub fn new(op: StoreOp, tier: StorageTier, key: &str, reason: impl Into<String>) -> Self {
        Self {
            op,
            tier,
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// String key-value storage with one instance per tier.
///
/// Values are opaque strings; no serialization is applied, so whatever is
/// written can be read back by any other script on the same origin.
pub trait KeyValueStore {
    fn tier(&self) -> StorageTier;
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Web Storage backed store.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    tier: StorageTier,
}

impl BrowserStore {
    pub fn durable() -> Self {
        Self {
            tier: StorageTier::Durable,
        }
    }

    pub fn session() -> Self {
        Self {
            tier: StorageTier::Session,
        }
    }

    // Looked up on every call. Blocked storage (SecurityError, no window)
    // becomes a `StoreError` instead of a trap.
    fn raw(&self, op: StoreOp, key: &str) -> Result<web_sys::Storage, StoreError> {
        let lookup = match web_sys::window() {
            None => Err("window not found".to_string()),
            Some(window) => match self.tier() {
                StorageTier::Durable => window.local_storage(),
                StorageTier::Session => window.session_storage(),
            }
            .map_err(|e| js_error_text(&e)),
        };
        require_storage(self.tier(), op, key, lookup)
    }

    fn error(&self, op: StoreOp, key: &str, err: JsValue) -> StoreError {
        StoreError::new(op, self.tier(), key, js_error_text(&err))
    }
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn require_storage<S>(
    tier: StorageTier,
    op: StoreOp,
    key: &str,
    lookup: Result<Option<S>, String>,
) -> Result<S, StoreError> {
    match lookup {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::new(
            op,
            tier,
            key,
            format!("{tier} storage is not available"),
        )),
        Err(reason) => Err(StoreError::new(op, tier, key, reason)),
    }
}

impl KeyValueStore for BrowserStore {
    fn tier(&self) -> StorageTier {
        self.tier
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.raw(StoreOp::Get, key)?
            .get_item(key)
            .map_err(|e| self.error(StoreOp::Get, key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.raw(StoreOp::Set, key)?
            .set_item(key, value)
            .map_err(|e| self.error(StoreOp::Set, key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.raw(StoreOp::Remove, key)?
            .remove_item(key)
            .map_err(|e| self.error(StoreOp::Remove, key, e))
    }
}
