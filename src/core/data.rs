//! Per-state key/value store for cross-hook communication.
//!
//! Every state owns one `StateData` bag. Hooks and embedding code hold
//! cloned handles to the same underlying store, so a value written during
//! one visit is still there on the next visit unless something removed it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Errors from the typed access layer of a [`StateData`] bag.
///
/// Untyped access (`insert`, `get_value`, `remove`, ...) is total and never
/// returns these; only `set`/`get` can fail, when a value does not encode or
/// decode as the requested type.
#[derive(Debug, Error)]
pub enum DataError {
    /// No value is stored under the requested key.
    #[error("no value stored under key '{key}'")]
    Missing { key: String },

    /// The stored value could not be decoded as the requested type.
    #[error("value under key '{key}' could not be decoded: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },

    /// The supplied value could not be encoded for storage.
    #[error("value for key '{key}' could not be encoded: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// Open-ended key/value store scoped to one state.
///
/// `StateData` is a cheap cloneable handle; every clone sees the same
/// underlying map. The bag is never cleared automatically — not on enter,
/// not on exit, not on re-entry — so it doubles as cross-visit memory.
///
/// Values are stored as [`serde_json::Value`], keeping the bag open to
/// whatever the embedding application wants to put in it. The typed
/// `set`/`get` pair round-trips any serde type through that representation.
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateData;
///
/// let data = StateData::new();
/// data.insert("lives", 3);
/// data.insert("label", "boss fight");
///
/// assert_eq!(data.get::<i64>("lives").unwrap(), 3);
/// assert!(data.get::<i64>("score").is_err());
///
/// // Clones share the store.
/// let handle = data.clone();
/// handle.insert("lives", 2);
/// assert_eq!(data.get::<i64>("lives").unwrap(), 2);
/// ```
#[derive(Clone, Default)]
pub struct StateData {
    entries: Rc<RefCell<HashMap<String, Value>>>,
}

impl StateData {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, overwriting any existing value.
    ///
    /// Accepts anything with a direct [`Value`] conversion (numbers,
    /// strings, booleans, `Value` itself). For arbitrary serde types use
    /// [`StateData::set`].
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    /// Fetch a copy of the raw value under `key`, if present.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    /// Store any serializable value under `key`.
    pub fn set<T: Serialize>(&self, key: impl Into<String>, value: &T) -> Result<(), DataError> {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|source| DataError::Encode {
            key: key.clone(),
            source,
        })?;
        self.entries.borrow_mut().insert(key, value);
        Ok(())
    }

    /// Fetch and decode the value under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, DataError> {
        let value = self.get_value(key).ok_or_else(|| DataError::Missing {
            key: key.to_string(),
        })?;
        serde_json::from_value(value).map_err(|source| DataError::Decode {
            key: key.to_string(),
            source,
        })
    }

    /// Remove and return the value under `key`, if present.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.entries.borrow_mut().remove(key)
    }

    /// Check whether `key` holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop every entry. Only the caller ever clears a bag; the machinery
    /// never does.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// All stored keys, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl fmt::Debug for StateData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.keys();
        keys.sort();
        f.debug_struct("StateData").field("keys", &keys).finish()
    }
}
