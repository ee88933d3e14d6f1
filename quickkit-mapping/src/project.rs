//! Batch projection of one data object through a named set of paths

use crate::resolve::mapping;
use serde_json::{Map, Value};

/// A named set of path expressions: output field name to path
pub type KeyMap = Map<String, Value>;

/// Project `data` into a flat result map, one entry per string-valued path
///
/// Misses become `Value::Null` under their output key. Non-string `KeyMap`
/// values (nested maps and the like) are skipped rather than recursed into.
/// Non-container `data` yields `None` for the whole call.
pub fn each(keys: &KeyMap, data: &Value) -> Option<Map<String, Value>> {
    if !(data.is_object() || data.is_array()) {
        return None;
    }

    let mut result = Map::new();
    for (name, path) in keys {
        if let Value::String(path) = path {
            result.insert(
                name.clone(),
                mapping(data, path).cloned().unwrap_or(Value::Null),
            );
        }
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key_map(value: Value) -> KeyMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("tests build key maps from object literals"),
        }
    }

    #[test]
    fn test_each_projects_paths() {
        let keys = key_map(json!({"a": "x", "b": "y"}));
        let data = json!({"x": 1, "y": 2});
        let result = each(&keys, &data).unwrap();
        assert_eq!(Value::Object(result), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_each_nested_paths() {
        let keys = key_map(json!({"name": "user.profile.name", "first": "tags[0]"}));
        let data = json!({"user": {"profile": {"name": "wei"}}, "tags": ["new", "vip"]});
        let result = each(&keys, &data).unwrap();
        assert_eq!(Value::Object(result), json!({"name": "wei", "first": "new"}));
    }

    #[test]
    fn test_each_empty_inputs() {
        let empty = KeyMap::new();
        assert_eq!(each(&empty, &json!({})).unwrap(), KeyMap::new());
        assert_eq!(each(&empty, &json!({"x": 1})).unwrap(), KeyMap::new());

        let keys = key_map(json!({"a": "x"}));
        let result = each(&keys, &json!({})).unwrap();
        assert_eq!(Value::Object(result), json!({"a": null}));
    }

    #[test]
    fn test_each_misses_become_null() {
        let keys = key_map(json!({"a": "x", "b": "missing.path"}));
        let data = json!({"x": 1});
        let result = each(&keys, &data).unwrap();
        assert_eq!(Value::Object(result), json!({"a": 1, "b": null}));
    }

    #[test]
    fn test_each_skips_non_string_paths() {
        let keys = key_map(json!({"a": "x", "nested": {"b": "y"}, "n": 3}));
        let data = json!({"x": 1, "y": 2});
        let result = each(&keys, &data).unwrap();
        assert_eq!(Value::Object(result), json!({"a": 1}));
    }

    #[test]
    fn test_each_non_container_data() {
        let keys = key_map(json!({"a": "x"}));
        assert_eq!(each(&keys, &json!(null)), None);
        assert_eq!(each(&keys, &json!("text")), None);
    }
}
