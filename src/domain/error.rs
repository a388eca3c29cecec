//! Error types for plugkit.
//!
//! This module defines the centralized error type [`PlugkitError`] and a type alias
//! [`Result`] used throughout the crate. Tree search and predicate helpers never
//! fail; only settings storage, configuration and key-path parsing produce errors.

use thiserror::Error;

/// The main error type for plugkit operations.
///
/// Most variants carry a description of what went wrong. I/O and JSON errors
/// from external crates convert automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use plugkit::PlugkitError;
///
/// fn validate_config() -> Result<(), PlugkitError> {
///     Err(PlugkitError::Config("unknown modifier".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PlugkitError {
    /// Settings storage operation failed.
    ///
    /// Occurs when reading from or writing to a settings backend fails for a
    /// reason other than plain I/O (corrupt file contents, missing keys).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A dotted settings path could not be parsed.
    ///
    /// Raised for an empty path, an empty top-level key segment, or an array
    /// index too far past the end of its array.
    #[error("Invalid setting path: {0:?}")]
    InvalidPath(String),
}

/// A specialized `Result` type for plugkit operations.
pub type Result<T> = std::result::Result<T, PlugkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/plugkit.json")?)
        }

        let err = read_missing().unwrap_err();
        assert!(matches!(err, PlugkitError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn invalid_path_message_quotes_the_path() {
        let err = PlugkitError::InvalidPath(".nested".to_string());
        assert_eq!(err.to_string(), "Invalid setting path: \".nested\"");
    }
}
