//! Before-phase classification: narrate what a tool call is about to do.

use kulti_types::{
    AgentStatus, CanonicalTool, KultiThought, NormalizedToolEvent, PayloadFragment,
    ThoughtPriority, ThoughtType,
};
use serde_json::{Map, Value};

use crate::helpers::{clip, short_path};
use crate::normalize::normalize_tool_name;
use crate::params::{first_str_param, resolve_path, str_param};

/// Visual priority of the before-phase narration per canonical tool.
fn priority_for(canonical: CanonicalTool) -> ThoughtPriority {
    match canonical {
        CanonicalTool::Delegate => ThoughtPriority::Headline,
        CanonicalTool::Exec | CanonicalTool::WriteFile | CanonicalTool::EditFile => {
            ThoughtPriority::Working
        }
        CanonicalTool::ReadFile | CanonicalTool::Search | CanonicalTool::Memory => {
            ThoughtPriority::Detail
        }
        _ => ThoughtPriority::Working,
    }
}

/// Synthesize a narrated thought for a tool call that is about to run.
/// Pure and total: missing or mistyped parameters default to empty
/// strings, never a panic.
pub fn classify_before_tool(event: &NormalizedToolEvent) -> PayloadFragment {
    let canonical = normalize_tool_name(&event.tool_name);
    let params = &event.params;

    let mut meta = Map::new();
    meta.insert("tool".to_owned(), Value::String(event.tool_name.clone()));

    let (thought_type, content) = match canonical {
        CanonicalTool::Exec => {
            let cmd = str_param(params, "command");
            let desc = str_param(params, "description");
            let label = if !desc.is_empty() {
                desc.to_owned()
            } else if !cmd.is_empty() {
                clip(cmd, 120)
            } else {
                "running command".to_owned()
            };
            meta.insert("command".to_owned(), Value::String(clip(cmd, 200)));
            (ThoughtType::Tool, format!("Running: {label}"))
        }

        CanonicalTool::WriteFile => {
            let path = resolve_path(params);
            meta.insert("file".to_owned(), Value::String(path.to_owned()));
            (ThoughtType::Decision, format!("Writing: {}", short_path(path)))
        }

        CanonicalTool::EditFile => {
            let path = resolve_path(params);
            meta.insert("file".to_owned(), Value::String(path.to_owned()));
            (ThoughtType::Decision, format!("Editing: {}", short_path(path)))
        }

        CanonicalTool::ReadFile => {
            let path = resolve_path(params);
            meta.insert("file".to_owned(), Value::String(path.to_owned()));
            (
                ThoughtType::Observation,
                format!("Reading: {}", short_path(path)),
            )
        }

        CanonicalTool::Search => {
            let pattern = first_str_param(params, &["pattern", "query"]);
            meta.insert("pattern".to_owned(), Value::String(pattern.to_owned()));
            (ThoughtType::Observation, format!("Searching: {pattern}"))
        }

        CanonicalTool::Browser => {
            let action = str_param(params, "action");
            let action = if action.is_empty() { "browse" } else { action };
            let target = first_str_param(params, &["targetUrl", "url"]);
            let content = if target.is_empty() {
                format!("Browser: {action}")
            } else {
                format!("Browser: {action} {target}")
            };
            (ThoughtType::Context, content)
        }

        CanonicalTool::WebFetch => (
            ThoughtType::Context,
            format!("Fetching: {}", str_param(params, "url")),
        ),

        CanonicalTool::WebSearch => (
            ThoughtType::Context,
            format!("Searching web: {}", str_param(params, "query")),
        ),

        CanonicalTool::Memory => (
            ThoughtType::Context,
            format!("Recalling: {}", str_param(params, "query")),
        ),

        CanonicalTool::Delegate => {
            let desc = first_str_param(params, &["description", "prompt"]);
            (
                ThoughtType::Reasoning,
                format!("Delegating: {}", clip(desc, 200)),
            )
        }

        _ => (ThoughtType::Tool, format!("Using: {}", event.tool_name)),
    };

    PayloadFragment {
        thought: Some(KultiThought {
            thought_type,
            content,
            priority: Some(priority_for(canonical)),
            metadata: meta,
        }),
        status: Some(AgentStatus::Working),
        ..PayloadFragment::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kulti_types::ToolPhase;
    use serde_json::json;

    fn before_event(tool_name: &str, params: Value) -> NormalizedToolEvent {
        NormalizedToolEvent {
            tool_name: tool_name.to_owned(),
            phase: ToolPhase::Before,
            params,
            result: None,
        }
    }

    fn thought_of(fragment: PayloadFragment) -> KultiThought {
        fragment.thought.expect("before fragment has a thought")
    }

    #[test]
    fn write_narration_uses_basename() {
        let fragment = classify_before_tool(&before_event(
            "Write",
            json!({"file_path": "/a/b/app.ts"}),
        ));
        assert_eq!(fragment.status, Some(AgentStatus::Working));

        let thought = thought_of(fragment);
        assert_eq!(thought.content, "Writing: app.ts");
        assert_eq!(thought.thought_type, ThoughtType::Decision);
        assert_eq!(thought.priority, Some(ThoughtPriority::Working));
        assert_eq!(thought.metadata["tool"], "Write");
        assert_eq!(thought.metadata["file"], "/a/b/app.ts");
    }

    #[test]
    fn exec_prefers_description_over_command() {
        let thought = thought_of(classify_before_tool(&before_event(
            "Bash",
            json!({"command": "cargo build --release", "description": "Build the release binary"}),
        )));
        assert_eq!(thought.content, "Running: Build the release binary");
        assert_eq!(thought.thought_type, ThoughtType::Tool);
        assert_eq!(thought.metadata["command"], "cargo build --release");
    }

    #[test]
    fn exec_falls_back_to_clipped_command() {
        let long_cmd = "x".repeat(300);
        let thought = thought_of(classify_before_tool(&before_event(
            "Bash",
            json!({"command": long_cmd}),
        )));
        assert_eq!(thought.content, format!("Running: {}", "x".repeat(120)));
        assert_eq!(
            thought.metadata["command"].as_str().map(str::len),
            Some(200)
        );
    }

    #[test]
    fn exec_without_command_narrates_placeholder() {
        let thought = thought_of(classify_before_tool(&before_event("Bash", json!({}))));
        assert_eq!(thought.content, "Running: running command");
    }

    #[test]
    fn search_takes_pattern_then_query() {
        let thought = thought_of(classify_before_tool(&before_event(
            "Grep",
            json!({"pattern": "fn main"}),
        )));
        assert_eq!(thought.content, "Searching: fn main");
        assert_eq!(thought.thought_type, ThoughtType::Observation);
        assert_eq!(thought.priority, Some(ThoughtPriority::Detail));

        let thought = thought_of(classify_before_tool(&before_event(
            "search",
            json!({"query": "login handler"}),
        )));
        assert_eq!(thought.content, "Searching: login handler");
    }

    #[test]
    fn browser_appends_target_when_present() {
        let thought = thought_of(classify_before_tool(&before_event(
            "browser",
            json!({"action": "click", "targetUrl": "https://kulti.club"}),
        )));
        assert_eq!(thought.content, "Browser: click https://kulti.club");
        assert_eq!(thought.thought_type, ThoughtType::Context);

        let thought = thought_of(classify_before_tool(&before_event("browser", json!({}))));
        assert_eq!(thought.content, "Browser: browse");
    }

    #[test]
    fn delegate_clips_description_to_200() {
        let long = "d".repeat(250);
        let fragment = classify_before_tool(&before_event("Task", json!({"prompt": long})));
        let thought = thought_of(fragment);
        assert_eq!(thought.content, format!("Delegating: {}", "d".repeat(200)));
        assert_eq!(thought.thought_type, ThoughtType::Reasoning);
        assert_eq!(thought.priority, Some(ThoughtPriority::Headline));
    }

    #[test]
    fn unknown_tool_narrates_raw_name() {
        let thought = thought_of(classify_before_tool(&before_event("TodoWrite", json!({}))));
        assert_eq!(thought.content, "Using: TodoWrite");
        assert_eq!(thought.thought_type, ThoughtType::Tool);
        assert_eq!(thought.metadata["tool"], "TodoWrite");
    }

    #[test]
    fn empty_params_never_panic_for_any_tool() {
        for raw in [
            "Bash", "Write", "Edit", "Read", "Grep", "browser", "WebFetch", "WebSearch",
            "memory_get", "Task", "whatever",
        ] {
            let fragment = classify_before_tool(&before_event(raw, json!({})));
            assert!(fragment.thought.is_some(), "no thought for {raw}");
            assert_eq!(fragment.status, Some(AgentStatus::Working));
        }
    }

    #[test]
    fn null_params_never_panic() {
        let fragment = classify_before_tool(&before_event("Read", Value::Null));
        assert_eq!(thought_of(fragment).content, "Reading: unknown");
    }
}
