//! Tree search over loosely typed host data.
//!
//! Plugins receive host structures (module exports, rendered UI elements) as
//! untyped nested data. This module models them as [`serde_json::Value`] trees
//! and provides a depth-limited search plus shape predicates for picking the
//! right node out of them.
//!
//! # Modules
//!
//! - `search`: [`find_in_tree`], [`find_in_react_tree`] and their options
//! - `predicates`: [`is_object`] and [`has_props`]

pub mod predicates;
pub mod search;

pub use predicates::{has_props, is_object};
pub use search::{find_in_react_tree, find_in_tree, Depth, Filter, SearchOptions, REACT_WALKABLE};
