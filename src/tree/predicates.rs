//! Shape predicates for loosely typed tree nodes.

use serde_json::Value;

/// Returns `true` when `value` is a keyed mapping.
///
/// Arrays, `null` and scalars are not objects.
///
/// # Examples
///
/// ```rust
/// use plugkit::tree::is_object;
/// use serde_json::json;
///
/// assert!(is_object(&json!({})));
/// assert!(!is_object(&json!([])));
/// assert!(!is_object(&json!(null)));
/// ```
#[must_use]
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns `true` when `candidate` is a mapping that owns every listed key.
///
/// Stops at the first missing key.
///
/// # Examples
///
/// ```rust
/// use plugkit::tree::has_props;
/// use serde_json::json;
///
/// let module = json!({ "a": 1, "b": null });
/// assert!(has_props(&module, ["a", "b"]));
/// assert!(!has_props(&json!({ "a": 1 }), ["a", "b"]));
/// ```
pub fn has_props<I, S>(candidate: &Value, props: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidate
        .as_object()
        .is_some_and(|map| props.into_iter().all(|prop| map.contains_key(prop.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_object_boundaries() {
        assert!(is_object(&json!({})));
        assert!(is_object(&json!({ "nested": [] })));
        assert!(!is_object(&json!([])));
        assert!(!is_object(&json!(null)));
        assert!(!is_object(&json!("{}")));
        assert!(!is_object(&json!(0)));
    }

    #[test]
    fn has_props_requires_every_key() {
        assert!(!has_props(&json!({ "a": 1 }), ["a", "b"]));
        assert!(has_props(&json!({ "a": 1, "b": 2, "c": 3 }), ["a", "b"]));
    }

    #[test]
    fn has_props_with_no_names_only_checks_shape() {
        let none: [&str; 0] = [];
        assert!(has_props(&json!({}), none));
        assert!(!has_props(&json!([]), none));
    }

    #[test]
    fn has_props_rejects_non_objects() {
        assert!(!has_props(&json!(["a"]), ["0"]));
        assert!(!has_props(&json!(null), ["a"]));
    }

    #[test]
    fn has_props_accepts_owned_names() {
        let names = vec!["getUser".to_string(), "getCurrentUser".to_string()];
        let store = json!({ "getUser": {}, "getCurrentUser": {} });
        assert!(has_props(&store, &names));
    }
}
