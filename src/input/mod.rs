//! Input helpers for plugin event handlers.
//!
//! - [`modifier`]: modifier-key gating for pointer events

pub mod modifier;

pub use modifier::{check_for_modifier, Modifier, MouseEvent};
