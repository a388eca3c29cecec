//! Plugin context tying configuration to the helpers.
//!
//! [`Plugkit`] is what [`crate::initialize`] hands back: it owns the shared
//! settings store and applies the configured search depth and modifier gate,
//! so plugin code does not have to thread [`Config`] through every call.

use crate::domain::Result;
use crate::input::{check_for_modifier, MouseEvent};
use crate::settings::{use_setting, JsonSettingsStore, SettingBinding, SettingsStore, UseSettingOptions};
use crate::tree::{find_in_react_tree, find_in_tree, Depth, Filter, SearchOptions};
use crate::Config;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a settings store.
pub type SharedStore<S> = Rc<RefCell<S>>;

/// Configured entry point to the plugin helpers.
///
/// # Example
///
/// ```rust
/// use plugkit::{Config, Plugkit};
/// use plugkit::settings::MemoryStore;
/// use plugkit::tree::Filter;
/// use serde_json::json;
///
/// let config = Config { max_recursions: Some(8), ..Default::default() };
/// let kit = Plugkit::new(config, MemoryStore::new());
///
/// let tree = json!({ "props": { "user": { "id": 1 } } });
/// assert_eq!(kit.find_react(&tree, &Filter::key("user")), Some(&json!({ "id": 1 })));
/// ```
#[derive(Debug)]
pub struct Plugkit<S = JsonSettingsStore> {
    config: Config,
    settings: SharedStore<S>,
}

impl<S: SettingsStore> Plugkit<S> {
    /// Wraps `store` with the given configuration.
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config,
            settings: Rc::new(RefCell::new(store)),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Another handle to the shared settings store.
    #[must_use]
    pub fn settings(&self) -> SharedStore<S> {
        Rc::clone(&self.settings)
    }

    /// Binds a control to `path` in the shared settings store.
    ///
    /// # Errors
    ///
    /// See [`use_setting`].
    pub fn use_setting(
        &self,
        path: &str,
        default_value: Option<Value>,
        options: UseSettingOptions,
    ) -> Result<SettingBinding<SharedStore<S>>> {
        use_setting(self.settings(), path, default_value, options)
    }

    /// Default search options with the configured depth budget.
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::default().max_recursions(self.depth())
    }

    /// [`find_in_tree`] with [`Self::search_options`].
    #[must_use]
    pub fn find<'t>(&self, tree: &'t Value, filter: &Filter<'_>) -> Option<&'t Value> {
        find_in_tree(tree, filter, &self.search_options())
    }

    /// [`find_in_react_tree`] with the configured depth budget.
    #[must_use]
    pub fn find_react<'t>(&self, tree: &'t Value, filter: &Filter<'_>) -> Option<&'t Value> {
        find_in_react_tree(tree, filter, self.depth())
    }

    /// Whether the configured modifier gate is open for `event`.
    ///
    /// Always `false` while the gate is disabled.
    #[must_use]
    pub fn modifier_held(&self, event: &MouseEvent) -> bool {
        check_for_modifier(
            self.config.modifier_enabled,
            self.config.modifier.as_str(),
            event,
        )
        .unwrap_or(false)
    }

    fn depth(&self) -> Depth {
        Depth::from(self.config.max_recursions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifier;
    use crate::settings::MemoryStore;
    use serde_json::json;

    fn kit(config: Config) -> Plugkit<MemoryStore> {
        Plugkit::new(config, MemoryStore::new())
    }

    #[test]
    fn configured_depth_limits_search() {
        let tree = json!({ "a": { "b": { "needle": 1 } } });

        let shallow = kit(Config {
            max_recursions: Some(2),
            ..Config::default()
        });
        assert_eq!(shallow.find(&tree, &Filter::key("needle")), None);

        let unbounded = kit(Config::default());
        assert_eq!(unbounded.find(&tree, &Filter::key("needle")), Some(&json!(1)));
    }

    #[test]
    fn modifier_gate_follows_config() {
        let shift = MouseEvent {
            shift_key: true,
            ..MouseEvent::default()
        };

        let disabled = kit(Config {
            modifier: Modifier::Shift,
            modifier_enabled: false,
            ..Config::default()
        });
        assert!(!disabled.modifier_held(&shift));

        let enabled = kit(Config {
            modifier: Modifier::Shift,
            modifier_enabled: true,
            ..Config::default()
        });
        assert!(enabled.modifier_held(&shift));
        assert!(!enabled.modifier_held(&MouseEvent::default()));
    }

    #[test]
    fn bindings_write_through_shared_store() {
        let kit = kit(Config::default());
        let mut prefix = kit
            .use_setting("general.prefix", Some(json!("!")), UseSettingOptions::default())
            .unwrap();
        assert_eq!(prefix.value(), &json!("!"));

        prefix.on_change("?").unwrap();
        assert_eq!(
            kit.settings().borrow().get("general").unwrap(),
            Some(json!({ "prefix": "?" }))
        );
    }
}
