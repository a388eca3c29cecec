//! Domain layer for plugkit.
//!
//! Holds the crate-wide error type. The tree, input and settings modules all
//! report failures through [`PlugkitError`].
//!
//! # Examples
//!
//! ```
//! use plugkit::domain::{PlugkitError, Result};
//!
//! fn parse_depth(raw: &str) -> Result<usize> {
//!     raw.parse()
//!         .map_err(|_| PlugkitError::Config(format!("invalid depth: {raw}")))
//! }
//!
//! assert_eq!(parse_depth("3").unwrap(), 3);
//! ```

pub mod error;

pub use error::{PlugkitError, Result};
