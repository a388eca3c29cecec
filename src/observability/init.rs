//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::infrastructure::expand_tilde;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when none is configured.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Sets up a `tracing-subscriber` registry that:
/// 1. Filters events with an [`EnvFilter`] built from `config.trace_level`
///    (default `"info"`)
/// 2. Formats events with the `fmt` layer
/// 3. Writes them to `config.log_file` through a [`RotatingFileWriter`], or to
///    stderr when no log file is configured
///
/// # Initialization Behavior
///
/// - Creates the log file's directory if it doesn't exist
/// - Falls back to stderr if that directory cannot be created
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use plugkit::observability::init_tracing;
/// use plugkit::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let log_file = config.log_file.as_deref().and_then(prepare_log_file);
    let (writer, ansi) = match log_file {
        Some(path) => (BoxMakeWriter::new(RotatingFileWriter::new(path)), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    if subscriber.try_init().is_ok() {
        tracing::debug!(level = %level, "tracing initialized");
    }
}

/// Expands `~` and makes sure the log directory exists.
fn prepare_log_file(raw: &str) -> Option<PathBuf> {
    let path = PathBuf::from(expand_tilde(raw));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return None;
        }
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn prepare_log_file_creates_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("logs").join("plugkit.log");

        let prepared = prepare_log_file(target.to_str().unwrap()).unwrap();
        assert_eq!(prepared, target);
        assert!(target.parent().unwrap().is_dir());
    }

    #[test]
    fn init_is_idempotent() {
        let config = Config {
            trace_level: Some("not a [valid directive".to_string()),
            ..Config::default()
        };
        init_tracing(&config);
        init_tracing(&Config::default());
    }
}
