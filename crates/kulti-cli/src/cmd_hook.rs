//! `kulti hook`: classify one normalized tool event from stdin and ship
//! it. Designed for agent-runtime hook scripts: empty or malformed input
//! exits quietly, because a broken hook must never break the host agent.

use kulti_classify::{classify_after_tool, classify_before_tool};
use kulti_sdk::Kulti;
use kulti_types::{NormalizedToolEvent, PayloadFragment, ToolPhase};

/// Pure classification step, separated for testability.
fn classify_event(event: &NormalizedToolEvent) -> Option<PayloadFragment> {
    match event.phase {
        ToolPhase::Before => Some(classify_before_tool(event)),
        ToolPhase::After => classify_after_tool(event),
    }
}

pub async fn cmd_hook(stream: &Kulti) {
    let raw = std::io::read_to_string(std::io::stdin()).unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return;
    }

    let Ok(event) = serde_json::from_str::<NormalizedToolEvent>(raw) else {
        tracing::debug!("ignoring malformed hook input");
        return;
    };

    if let Some(fragment) = classify_event(&event) {
        stream.send(fragment).await;
    }
}
