//! Single-segment and dotted path resolution

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn index_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[(\d+)\]").unwrap_or_else(|e| unreachable!("index pattern is valid: {e}"))
    })
}

/// Resolve one segment, with optional `[N]` bracket indices
///
/// A bracket at the start of the key indexes the container itself; a bracket
/// after a name fetches that field, which must be an array with `N` in range.
/// Whatever follows the bracket recurses into the element. Without a bracket
/// the key is a plain object field read.
pub fn get<'a>(container: &'a Value, key: &str) -> Option<&'a Value> {
    if key.is_empty() || !(container.is_object() || container.is_array()) {
        return None;
    }

    if let Some(caps) = index_regex().captures(key) {
        let full = caps.get(0)?;
        let index: usize = caps[1].parse().ok()?;

        let element = if full.start() == 0 {
            container.as_array()?.get(index)?
        } else {
            let name = &key[..full.start()];
            container.as_object()?.get(name)?.as_array()?.get(index)?
        };

        let rest = &key[full.end()..];
        return if rest.is_empty() {
            Some(element)
        } else {
            get(element, rest)
        };
    }

    container.as_object()?.get(key)
}

/// Resolve a dotted path expression against a data structure
///
/// A path starting or ending with `.`, or containing `..`, is malformed and
/// resolves to `None`. A dotted path folds left-to-right through [`get`],
/// stopping at the first miss.
pub fn mapping<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    if !(data.is_object() || data.is_array()) {
        return None;
    }
    if path.contains("..") || path.starts_with('.') || path.ends_with('.') {
        return None;
    }
    if path.contains('.') {
        return path.split('.').try_fold(data, get);
    }
    get(data, path)
}
