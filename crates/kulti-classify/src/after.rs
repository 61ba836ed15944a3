//! After-phase classification: render tool results as code or terminal
//! artifacts.

use kulti_types::{
    CanonicalTool, CodeAction, KultiCode, KultiDiff, KultiDiffHunk, KultiStats,
    KultiTerminalLine, NormalizedToolEvent, PayloadFragment, TerminalLineType,
};

use crate::errors::detect_error;
use crate::helpers::{short_path, truncate, truncate_value};
use crate::language::get_language;
use crate::normalize::normalize_tool_name;
use crate::params::{resolve_path, str_param};

/// Written file content limit.
const MAX_CODE_CHARS: usize = 5000;
/// Terminal output limit.
const MAX_OUTPUT_CHARS: usize = 1500;

/// Render the result of a finished tool call. Returns `None` when the
/// tool produced no renderable artifact (the before-phase narration
/// already covered it) and no error was detected.
pub fn classify_after_tool(event: &NormalizedToolEvent) -> Option<PayloadFragment> {
    let canonical = normalize_tool_name(&event.tool_name);
    let params = &event.params;
    let error = detect_error(event);

    match canonical {
        CanonicalTool::WriteFile => {
            let filename = short_path(resolve_path(params)).to_owned();
            let content = str_param(params, "content");
            Some(PayloadFragment {
                code: Some(KultiCode {
                    language: get_language(&filename).to_owned(),
                    content: truncate(content, MAX_CODE_CHARS),
                    action: CodeAction::Write,
                    filename,
                }),
                stats: Some(KultiStats::files(1)),
                error,
                ..PayloadFragment::default()
            })
        }

        CanonicalTool::EditFile => {
            let filename = short_path(resolve_path(params)).to_owned();
            let language = get_language(&filename).to_owned();
            let removed: Vec<String> = str_param(params, "old_string")
                .split('\n')
                .map(str::to_owned)
                .collect();
            let added: Vec<String> = str_param(params, "new_string")
                .split('\n')
                .map(str::to_owned)
                .collect();

            // Deliberately a full-removal/full-addition rendering, not a
            // minimal line diff. Downstream renderers expect this shape.
            let mut legacy = format!("--- {filename}\n");
            for line in &removed {
                legacy.push_str("- ");
                legacy.push_str(line);
                legacy.push('\n');
            }
            for line in &added {
                legacy.push_str("+ ");
                legacy.push_str(line);
                legacy.push('\n');
            }

            Some(PayloadFragment {
                code: Some(KultiCode {
                    filename: filename.clone(),
                    language: language.clone(),
                    content: truncate(&legacy, MAX_CODE_CHARS),
                    action: CodeAction::Edit,
                }),
                diff: Some(KultiDiff {
                    filename,
                    language,
                    hunks: vec![KultiDiffHunk {
                        start: 0,
                        removed,
                        added,
                    }],
                }),
                stats: Some(KultiStats::files(1)),
                error,
                ..PayloadFragment::default()
            })
        }

        CanonicalTool::Exec => {
            let cmd = str_param(params, "command");
            let output = truncate_value(event.result.as_ref(), MAX_OUTPUT_CHARS);

            let mut terminal = vec![KultiTerminalLine {
                line_type: TerminalLineType::Input,
                content: format!("$ {cmd}"),
            }];
            if !output.trim().is_empty() {
                terminal.push(KultiTerminalLine {
                    line_type: TerminalLineType::Output,
                    content: output,
                });
            }

            Some(PayloadFragment {
                terminal: Some(terminal),
                terminal_append: Some(true),
                stats: Some(KultiStats::commands(1)),
                error,
                ..PayloadFragment::default()
            })
        }

        _ => error.map(|error| PayloadFragment {
            error: Some(error),
            ..PayloadFragment::default()
        }),
    }
}
