//! Error detection over after-phase tool results.

use kulti_types::{KultiError, NormalizedToolEvent};

use crate::helpers::{truncate, value_to_string};
use crate::params::resolve_path;

/// Lowercased markers that flag a tool result as an error.
const ERROR_MARKERS: &[&str] = &[
    "error:",
    "enoent",
    "eacces",
    "failed",
    "command not found",
    "compilation failed",
    "type error",
    "syntax error",
];

/// Markers used to pick the most meaningful line for the message.
const LINE_MARKERS: &[&str] = &["error", "enoent", "eacces", "failed", "exit code"];

/// `exit code` followed by a non-zero digit anywhere in the text.
fn has_nonzero_exit(lowered: &str) -> bool {
    lowered.match_indices("exit code ").any(|(idx, needle)| {
        lowered[idx + needle.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() && c != '0')
    })
}

/// Inspect a tool result for common failure signatures. Returns a
/// structured error when one is found, `None` otherwise.
pub fn detect_error(event: &NormalizedToolEvent) -> Option<KultiError> {
    let result = value_to_string(event.result.as_ref());
    if result.is_empty() {
        return None;
    }

    let lowered = result.to_lowercase();
    let flagged =
        ERROR_MARKERS.iter().any(|m| lowered.contains(m)) || has_nonzero_exit(&lowered);
    if !flagged {
        return None;
    }

    let message = result
        .lines()
        .find(|line| {
            let lowered_line = line.to_lowercase();
            LINE_MARKERS.iter().any(|m| lowered_line.contains(m))
        })
        .or_else(|| result.lines().next())
        .unwrap_or("Unknown error");

    let file = resolve_path(&event.params);
    Some(KultiError {
        message: truncate(message, 500),
        file: (file != "unknown").then(|| file.to_owned()),
        line: None,
        stack: Some(truncate(&result, 2000)),
        recovery_strategy: None,
    })
}
