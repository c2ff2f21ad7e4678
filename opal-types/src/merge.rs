//! The shallow-merge policy over JSON values.
//!
//! `serde_json::Value` is already the tagged union the store needs (null,
//! bool, number, string, array, object); the merge policy is defined per
//! variant pair rather than by runtime duck typing.

use serde_json::Value;

/// Shallow-merges `partial` into `target`, returning the new entry value.
///
/// Policy, per variant pair:
///
/// - object ← object: each top-level field of `partial` overwrites the same
///   field in `target`; fields not named in `partial` are untouched. A field
///   whose value is `null` in `partial` is *removed* from the result, so
///   callers can clear a single field with `merge(key, {"errors": null})`.
/// - `partial` is `null`: the result is `null` — merging null clears the
///   entry, same as `clear`.
/// - every other combination (primitive or array on either side): `partial`
///   replaces `target` wholesale. Merge on a boolean or string behaves
///   exactly like set. This mismatch policy is uniform; there is no
///   per-call-site inference.
///
/// `target` is `None` when the key is absent; merging into an absent key
/// behaves like merging into `null` (the partial becomes the entry).
#[must_use]
pub fn shallow_merge(target: Option<Value>, partial: Value) -> Value {
    match (target, partial) {
        (_, Value::Null) => Value::Null,
        (Some(Value::Object(mut existing)), Value::Object(incoming)) => {
            for (field, value) in incoming {
                if value.is_null() {
                    existing.remove(&field);
                } else {
                    existing.insert(field, value);
                }
            }
            Value::Object(existing)
        }
        // Object partial into an absent/null target still drops null fields,
        // so `merge` on a fresh key and on an existing key agree about them.
        (None | Some(Value::Null), Value::Object(incoming)) => {
            let filtered: serde_json::Map<String, Value> = incoming
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .collect();
            Value::Object(filtered)
        }
        (_, partial) => partial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_into_object_overwrites_named_fields_only() {
        let target = Some(json!({"a": 1, "b": 2}));
        let merged = shallow_merge(target, json!({"b": 3, "c": 4}));
        assert_eq!(merged, json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn null_field_removes() {
        let target = Some(json!({"errors": {"field": "bad"}, "isLoading": true}));
        let merged = shallow_merge(target, json!({"errors": null}));
        assert_eq!(merged, json!({"isLoading": true}));
    }

    #[test]
    fn null_partial_clears() {
        assert_eq!(shallow_merge(Some(json!({"a": 1})), Value::Null), Value::Null);
        assert_eq!(shallow_merge(None, Value::Null), Value::Null);
    }

    #[test]
    fn object_into_absent_drops_null_fields() {
        let merged = shallow_merge(None, json!({"a": 1, "b": null}));
        assert_eq!(merged, json!({"a": 1}));
    }

    #[test]
    fn primitive_partial_replaces() {
        assert_eq!(shallow_merge(Some(json!({"a": 1})), json!(true)), json!(true));
        assert_eq!(shallow_merge(Some(json!(false)), json!(true)), json!(true));
        assert_eq!(shallow_merge(Some(json!("old")), json!("new")), json!("new"));
    }

    #[test]
    fn object_into_primitive_replaces() {
        let merged = shallow_merge(Some(json!(5)), json!({"a": 1}));
        assert_eq!(merged, json!({"a": 1}));
    }

    #[test]
    fn array_replaces_wholesale() {
        let merged = shallow_merge(Some(json!([1, 2])), json!([3]));
        assert_eq!(merged, json!([3]));
    }
}
