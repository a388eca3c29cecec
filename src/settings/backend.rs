//! Settings store abstraction.
//!
//! This module defines the [`SettingsStore`] trait: the key/value capability a
//! host application hands to a plugin for persisting its settings. Bindings
//! created by [`crate::settings::use_setting`] only ever talk to this trait, so
//! any backend (the host's own store, [`MemoryStore`], [`JsonSettingsStore`])
//! can sit behind them.
//!
//! [`MemoryStore`]: crate::settings::MemoryStore
//! [`JsonSettingsStore`]: crate::settings::JsonSettingsStore

use crate::domain::Result;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Key/value settings capability addressed by top-level keys.
///
/// Values are arbitrary JSON; nested fields are addressed by the caller (see
/// [`crate::settings::SettingPath`]), not by the store.
///
/// # Examples
///
/// ```
/// use plugkit::settings::{MemoryStore, SettingsStore};
/// use serde_json::json;
///
/// let mut store = MemoryStore::new();
/// store.set("theme", json!("dark"))?;
/// assert_eq!(store.get("theme")?, Some(json!("dark")));
/// assert_eq!(store.get("missing")?, None);
/// # Ok::<(), plugkit::PlugkitError>(())
/// ```
pub trait SettingsStore {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Shared handle so several bindings on the UI thread can use one store.
impl<S: SettingsStore + ?Sized> SettingsStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.borrow_mut().set(key, value)
    }
}
