//! Infrastructure layer for filesystem and environment interactions.
//!
//! - [`paths`]: data directory resolution and `~` expansion

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};

use std::path::PathBuf;

/// File name of the default settings store inside [`get_data_dir`].
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Returns the default location of the settings file.
///
/// # Examples
///
/// ```
/// use plugkit::infrastructure::default_settings_file;
///
/// assert!(default_settings_file().ends_with("settings.json"));
/// ```
#[must_use]
pub fn default_settings_file() -> PathBuf {
    get_data_dir().join(SETTINGS_FILE_NAME)
}
