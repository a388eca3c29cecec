//! Depth-limited recursive search over nested JSON-like trees.
//!
//! [`find_in_tree`] walks a [`serde_json::Value`] depth-first in pre-order and
//! returns the first node accepted by a [`Filter`]. The walk can be restricted to
//! an explicit list of walkable keys, can skip ignored keys, and stops descending
//! once its [`Depth`] budget is spent.
//!
//! [`find_in_react_tree`] fixes the walkable keys to the ones a rendered UI
//! element tree links through (`props`, `children`, `child`, `sibling`).
//!
//! # Example
//!
//! ```rust
//! use plugkit::tree::{find_in_tree, Filter, SearchOptions};
//! use serde_json::json;
//!
//! let tree = json!({ "a": { "x": 1 }, "b": { "x": 2 } });
//! let options = SearchOptions::default().ignore(["a"]);
//!
//! assert_eq!(find_in_tree(&tree, &Filter::key("x"), &options), Some(&json!(2)));
//! ```

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

/// Keys followed when searching a rendered UI element tree, in visit order.
pub const REACT_WALKABLE: [&str; 4] = ["props", "children", "child", "sibling"];

/// Remaining recursion budget for a search.
///
/// Every level of descent consumes one unit. A search entered with
/// `Limited(0)` returns nothing without inspecting the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    /// No limit on descent.
    #[default]
    Unbounded,
    /// At most this many levels may still be entered.
    Limited(usize),
}

impl Depth {
    /// Returns `true` once no further node may be inspected.
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Limited(0))
    }

    /// Returns the budget left for the children of the current node.
    #[must_use]
    pub const fn decrement(self) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Limited(n) => Self::Limited(n.saturating_sub(1)),
        }
    }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Self::Limited(levels)
    }
}

impl From<Option<usize>> for Depth {
    fn from(levels: Option<usize>) -> Self {
        levels.map_or(Self::Unbounded, Self::Limited)
    }
}

/// What a search is looking for.
///
/// A `Key` filter matches a mapping that owns the key and yields the value
/// stored under it. A `Predicate` filter yields the accepted node itself.
pub enum Filter<'a> {
    /// Match mappings owning this key; the value at the key is returned.
    Key(Cow<'a, str>),
    /// Match any node the predicate accepts; the node is returned.
    Predicate(Box<dyn Fn(&Value) -> bool + 'a>),
}

impl<'a> Filter<'a> {
    /// Creates a filter that looks a key up directly on each visited mapping.
    pub fn key(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Key(name.into())
    }

    /// Creates a filter from a node predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plugkit::tree::{find_in_tree, is_object, Filter, SearchOptions};
    /// use serde_json::json;
    ///
    /// let tree = json!({ "a": { "b": 1 } });
    /// let filter = Filter::predicate(|node| is_object(node) && node["b"] == 1);
    ///
    /// assert_eq!(
    ///     find_in_tree(&tree, &filter, &SearchOptions::default()),
    ///     Some(&json!({ "b": 1 }))
    /// );
    /// ```
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + 'a,
    {
        Self::Predicate(Box::new(predicate))
    }

    /// Checks a single node, returning what the search should yield on a match.
    #[must_use]
    pub fn matches<'t>(&self, node: &'t Value) -> Option<&'t Value> {
        match self {
            Self::Key(key) => node.as_object().and_then(|map| map.get(&**key)),
            Self::Predicate(predicate) => predicate(node).then_some(node),
        }
    }
}

impl<'a> From<&'a str> for Filter<'a> {
    fn from(key: &'a str) -> Self {
        Self::key(key)
    }
}

impl From<String> for Filter<'_> {
    fn from(key: String) -> Self {
        Self::key(key)
    }
}

impl fmt::Debug for Filter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Options controlling which parts of a tree a search may enter.
///
/// Defaults: every own key is walkable, nothing is ignored, and depth is
/// unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Keys to descend into on mappings, in order. `None` means all own keys.
    pub walkable: Option<Vec<String>>,

    /// Keys never descended into, even when walkable.
    pub ignore: Vec<String>,

    /// Remaining recursion budget at the root.
    pub max_recursions: Depth,
}

impl SearchOptions {
    /// Restricts descent on mappings to the given keys, visited in this order.
    #[must_use]
    pub fn walkable<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.walkable = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Skips the given keys during descent.
    #[must_use]
    pub fn ignore<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the recursion budget.
    #[must_use]
    pub fn max_recursions(mut self, depth: impl Into<Depth>) -> Self {
        self.max_recursions = depth.into();
        self
    }

    fn is_ignored(&self, key: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == key)
    }
}

/// Searches `tree` depth-first for the first node accepted by `filter`.
///
/// Each node is checked before its children. Arrays are walked left to right;
/// mappings are walked in `walkable` order when set, otherwise in key order.
/// Returns `None` when nothing matches within the recursion budget.
///
/// # Examples
///
/// ```rust
/// use plugkit::tree::{find_in_tree, Filter, SearchOptions};
/// use serde_json::json;
///
/// let tree = json!([{ "k": 1 }, { "k": 2 }]);
/// let found = find_in_tree(&tree, &Filter::key("k"), &SearchOptions::default());
/// assert_eq!(found, Some(&json!(1)));
///
/// // A zero budget inspects nothing, not even the root.
/// let root = json!({ "k": 0 });
/// let none = SearchOptions::default().max_recursions(0_usize);
/// assert_eq!(find_in_tree(&root, &Filter::key("k"), &none), None);
/// ```
#[must_use]
pub fn find_in_tree<'t>(
    tree: &'t Value,
    filter: &Filter<'_>,
    options: &SearchOptions,
) -> Option<&'t Value> {
    let found = walk(tree, filter, options, options.max_recursions);
    tracing::trace!(
        ?filter,
        depth = ?options.max_recursions,
        found = found.is_some(),
        "tree search finished"
    );
    found
}

/// Searches a rendered UI element tree, following only `props`, `children`,
/// `child` and `sibling` links.
///
/// # Examples
///
/// ```rust
/// use plugkit::tree::{find_in_react_tree, Depth, Filter};
/// use serde_json::json;
///
/// let element = json!({
///     "type": "div",
///     "props": { "children": [{ "props": { "id": "avatar" } }] }
/// });
///
/// let found = find_in_react_tree(&element, &Filter::key("id"), Depth::Unbounded);
/// assert_eq!(found, Some(&json!("avatar")));
/// ```
#[must_use]
pub fn find_in_react_tree<'t>(
    tree: &'t Value,
    filter: &Filter<'_>,
    max_recursions: impl Into<Depth>,
) -> Option<&'t Value> {
    let options = SearchOptions::default()
        .walkable(REACT_WALKABLE)
        .max_recursions(max_recursions);
    find_in_tree(tree, filter, &options)
}

fn walk<'t>(
    node: &'t Value,
    filter: &Filter<'_>,
    options: &SearchOptions,
    depth: Depth,
) -> Option<&'t Value> {
    if depth.is_exhausted() {
        return None;
    }

    if let Some(found) = filter.matches(node) {
        return Some(found);
    }

    let next = depth.decrement();
    match node {
        Value::Array(items) => items
            .iter()
            .find_map(|item| walk(item, filter, options, next)),
        Value::Object(map) => walk_mapping(map, filter, options, next),
        _ => None,
    }
}

fn walk_mapping<'t>(
    map: &'t Map<String, Value>,
    filter: &Filter<'_>,
    options: &SearchOptions,
    next: Depth,
) -> Option<&'t Value> {
    let descend = |key: &str| {
        if options.is_ignored(key) {
            return None;
        }
        map.get(key)
            .and_then(|child| walk(child, filter, options, next))
    };

    match &options.walkable {
        Some(keys) => keys.iter().find_map(|key| descend(key.as_str())),
        None => map.keys().find_map(|key| descend(key.as_str())),
    }
}
