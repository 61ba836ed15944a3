//! Typed accessors over loosely-typed tool parameter bags.
//! Every access is total: missing keys, non-object bags, and type
//! mismatches all resolve to the empty string.

use serde_json::Value;

/// String parameter lookup; anything missing or non-string is `""`.
pub fn str_param<'a>(params: &'a Value, key: &str) -> &'a str {
    params.get(key).and_then(Value::as_str).unwrap_or("")
}

/// First non-empty string among `keys`, else `""`.
pub fn first_str_param<'a>(params: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .map(|key| str_param(params, key))
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// The file path a tool call refers to: first of `file_path` | `path` |
/// `filename`, else `"unknown"`.
pub fn resolve_path<'a>(params: &'a Value) -> &'a str {
    let path = first_str_param(params, &["file_path", "path", "filename"]);
    if path.is_empty() { "unknown" } else { path }
}
