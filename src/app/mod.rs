//! Application layer: the configured plugin context.
//!
//! - [`context`]: [`Plugkit`], returned by [`crate::initialize`]

pub mod context;

pub use context::{Plugkit, SharedStore};
