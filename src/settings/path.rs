//! Dotted key paths into settings values.
//!
//! A path such as `"appearance.colors.accent"` names the top-level store key
//! (`appearance`) followed by the nested fields inside that key's value
//! (`colors`, `accent`). Nested lookups and assignments follow the usual
//! JavaScript object-path conventions: mappings are indexed by key, arrays by
//! segments that are canonical non-negative integers, and assignment creates
//! any missing containers along the way.

use crate::domain::{PlugkitError, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Largest segment treated as an array index. Bigger integers are plain keys.
const MAX_ARRAY_INDEX: usize = u32::MAX as usize - 1;

/// Most `null` slots a single assignment may append to pad an array.
const MAX_ARRAY_PADDING: usize = 1 << 16;

/// A parsed dotted settings path.
///
/// # Examples
///
/// ```
/// use plugkit::settings::SettingPath;
///
/// let path = SettingPath::parse("appearance.colors.accent")?;
/// assert_eq!(path.key(), "appearance");
/// assert_eq!(path.nested(), ["colors", "accent"]);
/// assert!(path.is_nested());
/// # Ok::<(), plugkit::PlugkitError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingPath {
    key: String,
    nested: Vec<String>,
}

impl SettingPath {
    /// Splits `path` on `.` into a top-level key and nested segments.
    ///
    /// # Errors
    ///
    /// Returns [`PlugkitError::InvalidPath`] if the top-level key is empty.
    pub fn parse(path: &str) -> Result<Self> {
        let mut segments = path.split('.');
        let key = segments
            .next()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PlugkitError::InvalidPath(path.to_string()))?;

        Ok(Self {
            key: key.to_string(),
            nested: segments.map(String::from).collect(),
        })
    }

    /// Top-level store key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Segments addressing a field inside the top-level value.
    #[must_use]
    pub fn nested(&self) -> &[String] {
        &self.nested
    }

    /// Returns `true` if the path points below the top-level value.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

impl FromStr for SettingPath {
    type Err = PlugkitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SettingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        for segment in &self.nested {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

/// Looks up the field addressed by `segments` inside `value`.
///
/// Returns `None` when any step is missing or descends into a scalar.
///
/// # Examples
///
/// ```
/// use plugkit::settings::get_path;
/// use serde_json::json;
///
/// let value = json!({ "users": [{ "name": "ada" }] });
/// let segments = ["users".to_string(), "0".to_string(), "name".to_string()];
/// assert_eq!(get_path(&value, &segments), Some(&json!("ada")));
/// ```
#[must_use]
pub fn get_path<'v>(value: &'v Value, segments: &[String]) -> Option<&'v Value> {
    segments.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment.as_str()),
        Value::Array(items) => parse_index(segment).and_then(|index| items.get(index)),
        _ => None,
    })
}

/// Assigns `new_value` to the field addressed by `segments` inside `target`.
///
/// Missing or scalar intermediates are replaced by a fresh container: an
/// array when the segment stored into it is an index, otherwise a mapping.
/// Indexing past the end of an array pads it with `null`. An array addressed
/// by a non-index segment is turned into a mapping keyed by its indices.
/// Integers above `4294967294` are not indices and address mapping keys.
///
/// # Errors
///
/// Returns [`PlugkitError::InvalidPath`] when an index lies more than 65536
/// slots past the end of its array. `target` may already hold containers
/// created for earlier segments.
///
/// # Examples
///
/// ```
/// use plugkit::settings::set_path;
/// use serde_json::json;
///
/// let mut value = json!({ "keep": true });
/// set_path(&mut value, &["list".into(), "1".into(), "id".into()], json!(7))?;
/// assert_eq!(value, json!({ "keep": true, "list": [null, { "id": 7 }] }));
/// # Ok::<(), plugkit::PlugkitError>(())
/// ```
pub fn set_path(target: &mut Value, segments: &[String], new_value: Value) -> Result<()> {
    match segments.split_first() {
        None => {
            *target = new_value;
            Ok(())
        }
        Some((segment, rest)) => set_path(child_slot(target, segment)?, rest, new_value),
    }
}

fn child_slot<'v>(target: &'v mut Value, segment: &str) -> Result<&'v mut Value> {
    let index = parse_index(segment);

    if index.is_none() && target.is_array() {
        if let Value::Array(items) = std::mem::take(target) {
            *target = Value::Object(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), item))
                    .collect(),
            );
        }
    }

    match target {
        Value::Array(items) => {
            let index = index.unwrap_or(items.len());
            if index >= items.len() {
                if index - items.len() > MAX_ARRAY_PADDING {
                    return Err(PlugkitError::InvalidPath(format!(
                        "index {index} is too far past the end of a {}-element array",
                        items.len()
                    )));
                }
                items.resize(index + 1, Value::Null);
            }
            Ok(&mut items[index])
        }
        Value::Object(map) => Ok(map.entry(segment).or_insert(Value::Null)),
        scalar => {
            *scalar = empty_container_for(index);
            child_slot(scalar, segment)
        }
    }
}

fn empty_container_for(index: Option<usize>) -> Value {
    if index.is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Parses canonical array indices: `0` or digits without a leading zero, up
/// to [`MAX_ARRAY_INDEX`].
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0"
        || (!segment.is_empty()
            && !segment.starts_with('0')
            && segment.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        segment
            .parse()
            .ok()
            .filter(|index| *index <= MAX_ARRAY_INDEX)
    } else {
        None
    }
}
