//! Tool-name normalization: raw per-runtime identifiers to canonical tags.

use kulti_types::CanonicalTool;

/// Raw tool name (lowercased) → canonical tool. Supporting a new agent
/// runtime means adding rows here, not a new type.
const TOOL_NAME_MAP: &[(&str, CanonicalTool)] = &[
    // Claude Code
    ("bash", CanonicalTool::Exec),
    ("write", CanonicalTool::WriteFile),
    ("edit", CanonicalTool::EditFile),
    ("read", CanonicalTool::ReadFile),
    ("grep", CanonicalTool::Search),
    ("glob", CanonicalTool::Search),
    ("task", CanonicalTool::Delegate),
    ("webfetch", CanonicalTool::WebFetch),
    ("websearch", CanonicalTool::WebSearch),
    // OpenClaw
    ("exec", CanonicalTool::Exec),
    ("write_file", CanonicalTool::WriteFile),
    ("edit_file", CanonicalTool::EditFile),
    ("read_file", CanonicalTool::ReadFile),
    ("search", CanonicalTool::Search),
    ("browser", CanonicalTool::Browser),
    ("web_fetch", CanonicalTool::WebFetch),
    ("web_search", CanonicalTool::WebSearch),
    ("memory_search", CanonicalTool::Memory),
    ("memory_get", CanonicalTool::Memory),
    // Codex CLI
    ("shell", CanonicalTool::Exec),
    ("create_file", CanonicalTool::WriteFile),
    ("apply_diff", CanonicalTool::EditFile),
    // Gemini CLI
    ("update_files", CanonicalTool::WriteFile),
];

/// Normalize a raw tool identifier, case-insensitively. Total: unmapped
/// names resolve to [`CanonicalTool::Unknown`], never an error.
pub fn normalize_tool_name(raw: &str) -> CanonicalTool {
    let lowered = raw.to_ascii_lowercase();
    TOOL_NAME_MAP
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|&(_, tool)| tool)
        .unwrap_or(CanonicalTool::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_is_case_insensitive() {
        assert_eq!(normalize_tool_name("Bash"), CanonicalTool::Exec);
        assert_eq!(normalize_tool_name("bash"), CanonicalTool::Exec);
        assert_eq!(normalize_tool_name("BASH"), CanonicalTool::Exec);
    }

    #[test]
    fn claude_code_vocabulary() {
        assert_eq!(normalize_tool_name("Write"), CanonicalTool::WriteFile);
        assert_eq!(normalize_tool_name("Edit"), CanonicalTool::EditFile);
        assert_eq!(normalize_tool_name("Read"), CanonicalTool::ReadFile);
        assert_eq!(normalize_tool_name("Grep"), CanonicalTool::Search);
        assert_eq!(normalize_tool_name("Glob"), CanonicalTool::Search);
        assert_eq!(normalize_tool_name("Task"), CanonicalTool::Delegate);
        assert_eq!(normalize_tool_name("WebFetch"), CanonicalTool::WebFetch);
        assert_eq!(normalize_tool_name("WebSearch"), CanonicalTool::WebSearch);
    }

    #[test]
    fn openclaw_vocabulary() {
        assert_eq!(normalize_tool_name("exec"), CanonicalTool::Exec);
        assert_eq!(normalize_tool_name("browser"), CanonicalTool::Browser);
        assert_eq!(normalize_tool_name("memory_search"), CanonicalTool::Memory);
        assert_eq!(normalize_tool_name("memory_get"), CanonicalTool::Memory);
    }

    #[test]
    fn codex_and_gemini_vocabulary() {
        assert_eq!(normalize_tool_name("shell"), CanonicalTool::Exec);
        assert_eq!(normalize_tool_name("create_file"), CanonicalTool::WriteFile);
        assert_eq!(normalize_tool_name("apply_diff"), CanonicalTool::EditFile);
        assert_eq!(normalize_tool_name("update_files"), CanonicalTool::WriteFile);
    }

    #[test]
    fn unmapped_names_resolve_to_unknown() {
        assert_eq!(normalize_tool_name("TodoWrite"), CanonicalTool::Unknown);
        assert_eq!(normalize_tool_name(""), CanonicalTool::Unknown);
        assert_eq!(normalize_tool_name("mcp__foo__bar"), CanonicalTool::Unknown);
    }
}
