//! Opaque state persistence across a component's destroy/recreate boundary.
//!
//! The external lifecycle driver chooses keys (typically derived from
//! component identity), saves each stateful component before teardown, and
//! restores after recreation. Implementations of [`StateStore`] only move
//! opaque blobs; the typed surface lives on [`StateStoreExt`], and
//! [`save_component`] / [`restore_component`] bridge a store to the
//! component lifecycle.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::component::Component;

/// Error raised when a model cannot be converted to its stored form.
#[derive(Debug, Error)]
pub enum StateError {
    /// The value for `key` could not be serialized.
    #[error("failed to serialize state for key '{key}'")]
    Serialize {
        /// The key the save was addressed to.
        key: String,
        /// The underlying serializer failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Typed key/value persistence boundary.
///
/// A missing key is never an error; a type mismatch on restore is the
/// caller's responsibility to avoid by using keys consistently per type.
/// In-memory maps, serialized bundles, and files all satisfy this contract;
/// [`MemoryStore`] is the in-crate implementation.
pub trait StateStore {
    /// Stores `value` under `key`, overwriting any prior value for the key.
    fn save_raw(&mut self, key: &str, value: Value);

    /// Returns the value previously saved under `key`, or `None`.
    fn restore_raw(&self, key: &str) -> Option<Value>;
}

/// Typed save/restore over any [`StateStore`].
pub trait StateStoreExt: StateStore {
    /// Serializes `value` and stores it under `key`.
    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StateError> {
        let value = serde_json::to_value(value).map_err(|source| StateError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.save_raw(key, value);
        Ok(())
    }

    /// Returns the value saved under `key` reinterpreted as `T`.
    ///
    /// A missing key and a stored value that cannot be reinterpreted as `T`
    /// both come back as `None`.
    fn restore<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.restore_raw(key)?;
        serde_json::from_value(raw).ok()
    }
}

impl<S: StateStore + ?Sized> StateStoreExt for S {}

/// In-memory [`StateStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn save_raw(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn restore_raw(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }
}

/// Snapshots `component`'s model into `store` under `key`.
///
/// Stateless components and stateful components with no model bound yet
/// save nothing. The lifecycle driver calls this before teardown.
pub fn save_component<C, S>(component: &C, store: &mut S, key: &str) -> Result<(), StateError>
where
    C: Component,
    C::Model: Serialize,
    S: StateStore + ?Sized,
{
    if let Some(model) = component.model() {
        store.save(key, model)?;
        tracing::trace!(key, "component state saved");
    }
    Ok(())
}

/// Feeds the value saved under `key` back into `component`.
///
/// Goes through `restore_model`: a stateful component has its model set —
/// absent if nothing was saved — and its restored hook fired; a stateless
/// component ignores the call. The lifecycle driver calls this after
/// recreation, before the component is used.
pub fn restore_component<C, S>(component: &mut C, store: &S, key: &str)
where
    C: Component,
    C::Model: DeserializeOwned,
    S: StateStore + ?Sized,
{
    let value = store.restore(key);
    component.restore_model(value);
}
