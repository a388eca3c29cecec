//! Plugin settings: store capability, backends and control bindings.
//!
//! Settings live in a key/value store addressed by top-level keys. Controls bind
//! to dotted paths below those keys through [`use_setting`].
//!
//! # Modules
//!
//! - `backend`: [`SettingsStore`] trait abstraction
//! - `memory`: in-memory [`MemoryStore`]
//! - `json`: file-backed [`JsonSettingsStore`] with atomic writes
//! - `path`: dotted [`SettingPath`] parsing and nested get/set
//! - `binding`: [`use_setting`] and [`SettingBinding`]

pub mod backend;
pub mod binding;
pub mod json;
pub mod memory;
pub mod path;

pub use backend::SettingsStore;
pub use binding::{use_setting, SettingBinding, SettingChange, UseSettingOptions};
pub use json::JsonSettingsStore;
pub use memory::MemoryStore;
pub use path::{get_path, set_path, SettingPath};
