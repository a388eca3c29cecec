//! JSON file-based settings store.
//!
//! This module provides a human-readable settings backend. Every key is kept in
//! memory and the whole file is rewritten on each change, using atomic writes
//! (write-to-temp + rename) so a crash never leaves a half-written file.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - file is loaded once on open
//! - **Write**: O(n) - serializes and writes the entire settings map
//! - **Best for**: plugin settings, a few hundred keys, infrequent writes

use crate::domain::error::{PlugkitError, Result};
use crate::settings::backend::SettingsStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON settings container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Settings values keyed by top-level setting name.
    #[serde(default)]
    settings: Map<String, Value>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            settings: Map::new(),
        }
    }
}

/// JSON file settings store.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "settings": {
///     "appearance": { "accent": "blue" },
///     "prefix": "!"
///   }
/// }
/// ```
///
/// # Examples
///
/// ```no_run
/// use plugkit::settings::{JsonSettingsStore, SettingsStore};
/// use serde_json::json;
///
/// let mut store = JsonSettingsStore::open("/tmp/plugkit/settings.json")?;
/// store.set("prefix", json!("!"))?;
/// # Ok::<(), plugkit::PlugkitError>(())
/// ```
#[derive(Debug)]
pub struct JsonSettingsStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on open.
    data: SettingsData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonSettingsStore {
    /// Opens a settings file, creating an empty store if it does not exist.
    ///
    /// Parent directories are created automatically. Nothing is written until
    /// the first change.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON settings store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty settings");
            SettingsData::default()
        };

        tracing::debug!(key_count = data.settings.len(), "settings store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Top-level setting keys, in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.settings.keys().map(String::as_str)
    }

    /// Writes pending changes to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the atomic write fails.
    pub fn flush(&mut self) -> Result<()> {
        self.save_to_file()
    }

    fn load_from_file(path: &Path) -> Result<SettingsData> {
        let contents = std::fs::read_to_string(path)?;
        let data: SettingsData = serde_json::from_str(&contents)
            .map_err(|e| PlugkitError::Storage(format!("failed to parse settings JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(PlugkitError::Storage(format!(
                "unsupported settings format version {}",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            keys = data.settings.len(),
            "loaded settings data"
        );

        Ok(data)
    }

    /// Saves data to disk using an atomic write.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving settings");

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("settings saved");
        Ok(())
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.settings.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let _span = tracing::debug_span!("json_settings_set", key = %key).entered();

        if self.data.settings.get(key) == Some(&value) {
            tracing::trace!("value unchanged");
            return Ok(());
        }

        let was_dirty = self.dirty;
        let previous = self.data.settings.insert(key.to_string(), value);
        self.dirty = true;

        if let Err(e) = self.save_to_file() {
            tracing::warn!(error = %e, "save failed, restoring previous value");
            match previous {
                Some(previous) => {
                    self.data.settings.insert(key.to_string(), previous);
                }
                // New keys sit at the end, so removal keeps the other keys in order.
                None => {
                    self.data.settings.remove(key);
                }
            }
            self.dirty = was_dirty;
            return Err(e);
        }
        Ok(())
    }
}

impl Drop for JsonSettingsStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty settings on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save settings on drop");
            }
        }
    }
}
