//! End-to-end classification flows: one tool call through both phases,
//! the way a runtime adapter drives the classifier.

use kulti_classify::{classify_after_tool, classify_before_tool};
use kulti_types::{
    AgentStatus, CodeAction, NormalizedToolEvent, TerminalLineType, ThoughtType, ToolPhase,
};
use serde_json::{Value, json};

fn event(tool_name: &str, phase: ToolPhase, params: Value, result: Option<Value>) -> NormalizedToolEvent {
    NormalizedToolEvent {
        tool_name: tool_name.to_owned(),
        phase,
        params,
        result,
    }
}

#[test]
fn write_flow_narrates_then_renders() {
    let params = json!({"file_path": "/repo/src/auth/session.rs", "content": "pub struct Session;"});

    let before = classify_before_tool(&event("Write", ToolPhase::Before, params.clone(), None));
    let thought = before.thought.expect("narration");
    assert_eq!(thought.content, "Writing: session.rs");
    assert_eq!(thought.thought_type, ThoughtType::Decision);
    assert_eq!(before.status, Some(AgentStatus::Working));

    let after = classify_after_tool(&event("Write", ToolPhase::After, params, Some(json!(""))))
        .expect("artifact");
    let code = after.code.expect("code");
    assert_eq!(code.filename, "session.rs");
    assert_eq!(code.language, "rust");
    assert_eq!(code.action, CodeAction::Write);
    assert_eq!(code.content, "pub struct Session;");
}

#[test]
fn exec_flow_across_runtimes_is_uniform() {
    // The same command surfaced by three different runtimes lands on the
    // same canonical rendering.
    for raw in ["Bash", "exec", "shell"] {
        let params = json!({"command": "cargo test"});
        let before = classify_before_tool(&event(raw, ToolPhase::Before, params.clone(), None));
        assert_eq!(
            before.thought.expect("narration").content,
            "Running: cargo test"
        );

        let after = classify_after_tool(&event(
            raw,
            ToolPhase::After,
            params,
            Some(json!("test result: ok. 12 passed")),
        ))
        .expect("artifact");
        let terminal = after.terminal.expect("terminal");
        assert_eq!(terminal[0].line_type, TerminalLineType::Input);
        assert_eq!(terminal[0].content, "$ cargo test");
        assert_eq!(terminal[1].content, "test result: ok. 12 passed");
        assert_eq!(after.terminal_append, Some(true));
    }
}

#[test]
fn read_flow_renders_nothing_after() {
    let params = json!({"file_path": "/repo/README.md"});
    let before = classify_before_tool(&event("Read", ToolPhase::Before, params.clone(), None));
    assert_eq!(before.thought.expect("narration").content, "Reading: README.md");

    let after = classify_after_tool(&event(
        "Read",
        ToolPhase::After,
        params,
        Some(json!("# Project\nBody text")),
    ));
    assert!(after.is_none());
}

#[test]
fn fragments_serialize_clean_wire_json() {
    let after = classify_after_tool(&event(
        "Edit",
        ToolPhase::After,
        json!({"file_path": "x.ts", "old_string": "a", "new_string": "b"}),
        None,
    ))
    .expect("artifact");

    let wire = serde_json::to_value(&after).expect("serialize");
    assert_eq!(wire["code"]["action"], "edit");
    assert_eq!(wire["code"]["content"], "--- x.ts\n- a\n+ b\n");
    assert_eq!(wire["diff"]["hunks"][0]["removed"], json!(["a"]));
    assert_eq!(wire["stats"]["files"], 1);
    // Untouched channels stay off the wire.
    assert!(wire.get("thought").is_none());
    assert!(wire.get("terminal").is_none());
}
