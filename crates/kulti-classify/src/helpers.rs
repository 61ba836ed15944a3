//! Shared string helpers for classification.

use serde_json::Value;

/// Appended whenever content is cut to fit an artifact limit.
pub const TRUNCATION_MARKER: &str = "... (truncated)";

/// Truncate to `max` characters, appending the marker when content was cut.
/// Char-based so multi-byte content never splits mid-scalar.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_owned();
    }
    let head: String = value.chars().take(max).collect();
    format!("{head}{TRUNCATION_MARKER}")
}

/// Char-safe prefix with no marker, for narration labels.
pub fn clip(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Render an optional JSON result as text: strings verbatim, absent/null
/// as empty, anything else compact JSON.
pub fn value_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Stringify then truncate an optional JSON result.
pub fn truncate_value(value: Option<&Value>, max: usize) -> String {
    truncate(&value_to_string(value), max)
}

/// Basename of a path: everything after the last `/`.
pub fn short_path(filepath: &str) -> &str {
    match filepath.rsplit_once('/') {
        Some((_, name)) => name,
        None => filepath,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncate_short_input_untouched() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_appends_marker() {
        let out = truncate("abcdef", 3);
        assert_eq!(out, format!("abc{TRUNCATION_MARKER}"));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let out = truncate("héllo wörld", 4);
        assert_eq!(out, format!("héll{TRUNCATION_MARKER}"));
    }

    #[test]
    fn clip_has_no_marker() {
        assert_eq!(clip("abcdef", 3), "abc");
        assert_eq!(clip("ab", 3), "ab");
    }

    #[test]
    fn value_to_string_shapes() {
        assert_eq!(value_to_string(None), "");
        assert_eq!(value_to_string(Some(&Value::Null)), "");
        assert_eq!(value_to_string(Some(&json!("plain"))), "plain");
        assert_eq!(value_to_string(Some(&json!({"ok": true}))), "{\"ok\":true}");
    }

    #[test]
    fn short_path_takes_basename() {
        assert_eq!(short_path("/a/b/app.ts"), "app.ts");
        assert_eq!(short_path("app.ts"), "app.ts");
        assert_eq!(short_path("relative/x.py"), "x.py");
    }
}
