//! Binding a UI control to a persisted setting.
//!
//! [`use_setting`] resolves a dotted path against a [`SettingsStore`], caches
//! the current value, and returns a [`SettingBinding`] whose `on_change` and
//! `on_clear` handlers keep the cache and the store in step. Handlers are meant
//! to be called synchronously from the UI thread.
//!
//! # Example
//!
//! ```rust
//! use plugkit::settings::{use_setting, MemoryStore, SettingsStore, UseSettingOptions};
//! use serde_json::json;
//!
//! let mut store = MemoryStore::new().with("appearance", json!({ "accent": "red" }));
//!
//! let mut accent = use_setting(
//!     &mut store,
//!     "appearance.accent",
//!     None,
//!     UseSettingOptions { clearable: true },
//! )?;
//! assert_eq!(accent.value(), &json!("red"));
//!
//! accent.on_change(json!({ "label": "Blue", "value": "blue" }))?;
//! assert_eq!(accent.value(), &json!("blue"));
//! drop(accent);
//!
//! assert_eq!(store.get("appearance")?, Some(json!({ "accent": "blue" })));
//! # Ok::<(), plugkit::PlugkitError>(())
//! ```

use crate::domain::Result;
use crate::settings::backend::SettingsStore;
use crate::settings::path::{get_path, set_path, SettingPath};
use serde_json::Value;

/// Options accepted by [`use_setting`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UseSettingOptions {
    /// Enables [`SettingBinding::on_clear`]. When unset, clearing does nothing.
    pub clearable: bool,
}

/// New value handed to [`SettingBinding::on_change`].
///
/// Controls report either the bare value (text inputs, switches) or an
/// option-like object carrying it under `value` (selects, radio groups).
#[derive(Debug, Clone, PartialEq)]
pub enum SettingChange {
    /// The value itself.
    Raw(Value),
    /// An object wrapping the value under its `value` field.
    Wrapped { value: Value },
}

impl SettingChange {
    /// Unwraps the value to store.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Raw(value) | Self::Wrapped { value } => value,
        }
    }
}

/// Objects carrying a `value` field are treated as wrappers; anything else is
/// taken as the raw value.
///
/// This is narrower than a plain "any object is a wrapper" rule: an object
/// without a `value` field is stored whole instead of collapsing to nothing.
impl From<Value> for SettingChange {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("value") => Self::Wrapped {
                value: map.remove("value").unwrap_or(Value::Null),
            },
            other => Self::Raw(other),
        }
    }
}

impl From<&str> for SettingChange {
    fn from(value: &str) -> Self {
        Self::Raw(Value::from(value))
    }
}

impl From<String> for SettingChange {
    fn from(value: String) -> Self {
        Self::Raw(Value::from(value))
    }
}

impl From<bool> for SettingChange {
    fn from(value: bool) -> Self {
        Self::Raw(Value::from(value))
    }
}

/// A UI control's view of one persisted setting.
///
/// Owns a handle to the store (often `&mut S` or `Rc<RefCell<S>>`) and the
/// cached value the control renders.
#[derive(Debug)]
pub struct SettingBinding<S> {
    store: S,
    path: SettingPath,
    value: Value,
    clearable: bool,
}

/// Binds `path` in `store` to a control.
///
/// The first path segment selects the store key; the rest address a field
/// inside that key's value. The cached value starts as the nested field, or
/// `default_value` (else `null`) when the field is missing. A path without
/// nested segments caches the top-level value as-is, without applying the
/// default.
///
/// # Errors
///
/// Returns an error if `path` has an empty top-level key or the store cannot
/// be read.
pub fn use_setting<S: SettingsStore>(
    store: S,
    path: &str,
    default_value: Option<Value>,
    options: UseSettingOptions,
) -> Result<SettingBinding<S>> {
    let path = SettingPath::parse(path)?;
    let _span = tracing::debug_span!("use_setting", path = %path).entered();

    let setting = store.get(path.key())?;
    let value = if path.is_nested() {
        setting
            .as_ref()
            .and_then(|setting| get_path(setting, path.nested()))
            .cloned()
            .or(default_value)
            .unwrap_or(Value::Null)
    } else {
        setting.unwrap_or(Value::Null)
    };

    tracing::debug!(clearable = options.clearable, "setting bound");
    Ok(SettingBinding {
        store,
        path,
        value,
        clearable: options.clearable,
    })
}

impl<S: SettingsStore> SettingBinding<S> {
    /// Value the control should display.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Path this binding writes to.
    #[must_use]
    pub const fn path(&self) -> &SettingPath {
        &self.path
    }

    /// Returns `true` if [`on_clear`](Self::on_clear) is active.
    #[must_use]
    pub const fn is_clearable(&self) -> bool {
        self.clearable
    }

    /// Stores a new value reported by the control.
    ///
    /// The cache is updated once the store has accepted the write.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn on_change(&mut self, new_value: impl Into<SettingChange>) -> Result<()> {
        let value = new_value.into().into_value();
        self.write(value.clone())?;
        self.value = value;
        Ok(())
    }

    /// Resets the setting to an empty string. Does nothing unless clearable.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn on_clear(&mut self) -> Result<()> {
        if !self.clearable {
            return Ok(());
        }
        let empty = Value::String(String::new());
        self.write(empty.clone())?;
        self.value = empty;
        Ok(())
    }

    /// Releases the store handle.
    pub fn into_store(self) -> S {
        self.store
    }

    fn write(&mut self, value: Value) -> Result<()> {
        let _span = tracing::debug_span!("setting_write", path = %self.path).entered();

        let updated = if self.path.is_nested() {
            let mut setting = self.store.get(self.path.key())?.unwrap_or(Value::Null);
            set_path(&mut setting, self.path.nested(), value)?;
            setting
        } else {
            value
        };

        self.store.set(self.path.key(), updated)
    }
}
