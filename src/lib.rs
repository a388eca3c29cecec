//! plugkit: helper utilities for UI-extension plugins.
//!
//! plugkit collects the small helpers a plugin for a larger host application
//! keeps reaching for:
//! - Depth-limited search over loosely typed host data (module exports,
//!   rendered UI element trees)
//! - Shape predicates for untyped mappings
//! - Modifier-key gating for pointer events
//! - Settings bindings that tie a control to a dotted path in a settings store
//! - JSON file-backed settings persistence with atomic writes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Entry point (lib.rs): Config, initialize()         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Plugkit context: config-driven helpers           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Tree (tree/)  │   │ Settings      │   │ Input         │
//! │ - find        │   │ (settings/)   │   │ (input/)      │
//! │ - predicates  │   │ - Store trait │   │ - Modifiers   │
//! │               │   │ - JSON / mem  │   │               │
//! │               │   │ - Bindings    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data paths (infrastructure/)                     │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber setup, rotating log file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: configured [`Plugkit`] context
//! - [`domain`]: error type and result alias
//! - [`infrastructure`]: data directory and `~` expansion
//! - [`input`]: modifier-key checks
//! - [`settings`]: settings store capability, backends and bindings
//! - [`tree`]: tree search and predicates
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! Options arrive from the host as string pairs ([`Config::from_map`]) or from
//! a TOML file ([`Config::from_file`]):
//!
//! ```toml
//! trace_level = "debug"
//! log_file = "~/.local/share/plugkit/plugkit.log"
//! settings_file = "~/.local/share/plugkit/settings.json"
//! max_recursions = 100
//! modifier = "shift"
//! modifier_enabled = true
//! ```
//!
//! # Examples
//!
//! ```rust
//! use plugkit::tree::{find_in_tree, Filter, SearchOptions};
//! use serde_json::json;
//!
//! let exports = json!({
//!     "default": { "getUser": {}, "getCurrentUser": {} },
//!     "Z": { "render": {} }
//! });
//!
//! let store = find_in_tree(
//!     &exports,
//!     &Filter::predicate(|m| plugkit::tree::has_props(m, ["getCurrentUser"])),
//!     &SearchOptions::default().max_recursions(3_usize),
//! );
//! assert!(store.is_some());
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod input;
pub mod observability;
pub mod settings;
pub mod tree;

pub use app::Plugkit;
pub use domain::{PlugkitError, Result};
pub use input::{check_for_modifier, Modifier, MouseEvent};
pub use settings::{use_setting, SettingBinding, SettingsStore, UseSettingOptions};
pub use tree::{find_in_react_tree, find_in_tree, has_props, is_object, Depth, Filter, SearchOptions};

use serde::{Deserialize, Serialize};
use settings::JsonSettingsStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Plugin configuration.
///
/// Every field is optional in both the string-map and TOML forms; missing or
/// unparseable values fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive for log output. Default: `"info"` when unset.
    pub trace_level: Option<String>,

    /// Log file path; `~` is expanded. Logs go to stderr when unset.
    pub log_file: Option<String>,

    /// Settings file path; `~` is expanded. Default:
    /// [`infrastructure::default_settings_file`].
    pub settings_file: Option<String>,

    /// Depth budget for searches made through [`Plugkit`]. `None` is unbounded.
    pub max_recursions: Option<usize>,

    /// Modifier that gates modifier-bound actions. Default: `none`.
    pub modifier: Modifier,

    /// Whether the modifier gate is active. Default: `false`.
    pub modifier_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            log_file: None,
            settings_file: None,
            max_recursions: None,
            modifier: Modifier::None,
            modifier_enabled: false,
        }
    }
}

impl Config {
    /// Parses configuration from host-supplied string options.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`, `log_file`, `settings_file`: taken as-is
    /// - `max_recursions`: `usize`; anything else means unbounded
    /// - `modifier`: `shift`, `ctrl`, `alt` or `none`; falls back to `none`
    /// - `modifier_enabled`: `true`/`false`; falls back to `false`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use plugkit::{Config, Modifier};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("max_recursions".to_string(), "12".to_string());
    /// map.insert("modifier".to_string(), "alt".to_string());
    /// map.insert("modifier_enabled".to_string(), "true".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.max_recursions, Some(12));
    /// assert_eq!(config.modifier, Modifier::Alt);
    /// assert!(config.modifier_enabled);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let max_recursions = config
            .get("max_recursions")
            .and_then(|s| s.trim().parse::<usize>().ok());

        let modifier = config
            .get("modifier")
            .map_or(Modifier::None, |raw| {
                raw.trim().parse().unwrap_or_else(|e| {
                    tracing::debug!(modifier = %raw, error = %e, "falling back to no modifier");
                    Modifier::None
                })
            });

        let modifier_enabled = config
            .get("modifier_enabled")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            trace_level: config.get("trace_level").cloned(),
            log_file: config.get("log_file").cloned(),
            settings_file: config.get("settings_file").cloned(),
            max_recursions,
            modifier,
            modifier_enabled,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            PlugkitError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Resolved path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.settings_file.as_deref().map_or_else(
            infrastructure::default_settings_file,
            |raw| PathBuf::from(infrastructure::expand_tilde(raw)),
        )
    }
}

/// Initializes plugkit with configuration.
///
/// Installs the tracing subscriber, opens the JSON settings store at
/// [`Config::settings_path`] and returns the configured [`Plugkit`] context.
///
/// # Errors
///
/// Returns an error if the settings file cannot be opened or parsed.
///
/// # Example
///
/// ```no_run
/// use plugkit::{initialize, Config};
///
/// let kit = initialize(&Config::default())?;
/// let options = kit.search_options();
/// # Ok::<(), plugkit::PlugkitError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Plugkit> {
    observability::init_tracing(config);
    tracing::debug!("initializing plugkit");

    let store = JsonSettingsStore::open(config.settings_path())?;
    Ok(Plugkit::new(config.clone(), store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn from_map_defaults_on_garbage() {
        let mut map = BTreeMap::new();
        map.insert("max_recursions".to_string(), "lots".to_string());
        map.insert("modifier".to_string(), "hyper".to_string());
        map.insert("modifier_enabled".to_string(), "yes".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.max_recursions, None);
        assert_eq!(config.modifier, Modifier::None);
        assert!(!config.modifier_enabled);
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugkit.toml");
        std::fs::write(
            &path,
            "max_recursions = 5\nmodifier = \"ctrl\"\nmodifier_enabled = true\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.max_recursions, Some(5));
        assert_eq!(config.modifier, Modifier::Ctrl);
        assert!(config.modifier_enabled);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn from_file_rejects_bad_modifier() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plugkit.toml");
        std::fs::write(&path, "modifier = \"hyper\"\n").unwrap();

        assert!(matches!(
            Config::from_file(&path),
            Err(PlugkitError::Config(_))
        ));
    }

    #[test]
    fn initialize_opens_configured_settings_file() {
        let dir = TempDir::new().unwrap();
        let settings = dir.path().join("data").join("settings.json");
        let config = Config {
            settings_file: Some(settings.to_string_lossy().into_owned()),
            ..Config::default()
        };

        let kit = initialize(&config).unwrap();
        let mut prefix = kit
            .use_setting("prefix", None, UseSettingOptions::default())
            .unwrap();
        prefix.on_change("!").unwrap();

        assert!(settings.exists());
    }
}
