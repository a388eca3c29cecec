//! Path utilities for plugin data files.
//!
//! Resolves the per-user data directory and expands `~` in configured paths.

use std::path::PathBuf;

/// Name of the directory holding plugkit data under the user data root.
const APP_DIR: &str = "plugkit";

/// Returns the data directory for plugkit files.
///
/// Resolves the platform data directory through `dirs::data_dir` (on Linux
/// `$XDG_DATA_HOME/plugkit` or `~/.local/share/plugkit`). Falls back to a
/// relative `.plugkit` directory when the platform reports none.
///
/// # Examples
///
/// ```
/// use plugkit::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("plugkit") || data_dir.ends_with(".plugkit"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or with no known home directory, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use plugkit::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("~user/other"), "~user/other");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home.into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_tilde_paths_are_untouched() {
        assert_eq!(expand_tilde("relative/dir"), "relative/dir");
        assert_eq!(expand_tilde("/etc/plugkit"), "/etc/plugkit");
    }

    #[test]
    fn tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            let home = home.to_string_lossy().into_owned();
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/x.json"), format!("{home}/x.json"));
        }
    }

    #[test]
    fn data_dir_sits_under_platform_data_root() {
        match dirs::data_dir() {
            Some(root) => assert_eq!(get_data_dir(), root.join("plugkit")),
            None => assert_eq!(get_data_dir(), PathBuf::from(".plugkit")),
        }
    }
}
