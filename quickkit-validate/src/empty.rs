//! Emptiness and shape predicates over JSON values

use serde_json::Value;

/// Options for [`is_empty`]
///
/// Null and the empty string are always empty; empty objects and arrays only
/// count when the matching option (or `all_empty`) is enabled. `true`
/// converts into the everything-enabled form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsEmptyOptions {
    pub all_empty: bool,
    pub object_empty: bool,
    pub array_empty: bool,
}

impl From<bool> for IsEmptyOptions {
    fn from(all: bool) -> Self {
        Self {
            all_empty: all,
            ..Self::default()
        }
    }
}

/// Whether the value is a plain mapping
pub fn is_object(val: &Value) -> bool {
    val.is_object()
}

/// Whether the value is set at all (anything but null)
pub fn is_set(val: &Value) -> bool {
    !val.is_null()
}

/// Whether a mapping carries the given key
pub fn has_own(val: &Value, key: &str) -> bool {
    val.as_object().is_some_and(|o| o.contains_key(key))
}

/// Emptiness check with configurable strictness
pub fn is_empty(val: &Value, options: impl Into<IsEmptyOptions>) -> bool {
    let opts = options.into();
    match val {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(o) => (opts.all_empty || opts.object_empty) && o.is_empty(),
        Value::Array(a) => (opts.all_empty || opts.array_empty) && a.is_empty(),
        _ => false,
    }
}
