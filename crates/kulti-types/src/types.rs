use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ─── Thought ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ThoughtType {
    Reasoning,
    Decision,
    Observation,
    Evaluation,
    Tool,
    Context,
    Prompt,
    General,
    /// Emitted by the high-level SDK only, never by the classifier.
    Confusion,
}

impl ThoughtType {
    pub const ALL: [Self; 9] = [
        Self::Reasoning,
        Self::Decision,
        Self::Observation,
        Self::Evaluation,
        Self::Tool,
        Self::Context,
        Self::Prompt,
        Self::General,
        Self::Confusion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reasoning => "reasoning",
            Self::Decision => "decision",
            Self::Observation => "observation",
            Self::Evaluation => "evaluation",
            Self::Tool => "tool",
            Self::Context => "context",
            Self::Prompt => "prompt",
            Self::General => "general",
            Self::Confusion => "confusion",
        }
    }
}

impl fmt::Display for ThoughtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThoughtType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reasoning" => Ok(Self::Reasoning),
            "decision" => Ok(Self::Decision),
            "observation" => Ok(Self::Observation),
            "evaluation" => Ok(Self::Evaluation),
            "tool" => Ok(Self::Tool),
            "context" => Ok(Self::Context),
            "prompt" => Ok(Self::Prompt),
            "general" => Ok(Self::General),
            "confusion" => Ok(Self::Confusion),
            _ => Err(ParseError::UnknownThoughtType(s.to_owned())),
        }
    }
}

/// Visual importance of a thought on the watch page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThoughtPriority {
    Headline,
    #[default]
    Working,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KultiThought {
    #[serde(rename = "type")]
    pub thought_type: ThoughtType,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ThoughtPriority>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

// ─── Code & Diff ──────────────────────────────────────────────────

/// Delete is representable upstream (SDK level) but never reaches the
/// wire; the classifier only synthesizes write and edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeAction {
    Write,
    Edit,
}

impl CodeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for CodeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KultiCode {
    /// Basename, not the full path.
    pub filename: String,
    pub language: String,
    /// Possibly truncated; see the classifier's per-artifact limits.
    pub content: String,
    pub action: CodeAction,
}

/// A single hunk in a structured diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KultiDiffHunk {
    pub start: u32,
    pub removed: Vec<String>,
    pub added: Vec<String>,
}

/// Structured diff for edit operations, emitted alongside the legacy
/// verbose code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KultiDiff {
    pub filename: String,
    pub language: String,
    pub hunks: Vec<KultiDiffHunk>,
}

// ─── Terminal ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalLineType {
    Input,
    Output,
    Error,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KultiTerminalLine {
    #[serde(rename = "type")]
    pub line_type: TerminalLineType,
    pub content: String,
}

// ─── Session events ───────────────────────────────────────────────

/// Structured error event for debug mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KultiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_strategy: Option<String>,
}

/// Session goal declared by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KultiGoal {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A milestone reached during the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KultiMilestone {
    pub label: String,
    pub completed: bool,
}

/// Live preview of what the agent is building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KultiPreview {
    pub url: String,
}

// ─── Status & Stats ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum AgentStatus {
    Live,
    Working,
    Thinking,
    Starting,
    Paused,
    Done,
    Offline,
}

impl AgentStatus {
    pub const ALL: [Self; 7] = [
        Self::Live,
        Self::Working,
        Self::Thinking,
        Self::Starting,
        Self::Paused,
        Self::Done,
        Self::Offline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Working => "working",
            Self::Thinking => "thinking",
            Self::Starting => "starting",
            Self::Paused => "paused",
            Self::Done => "done",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "working" => Ok(Self::Working),
            "thinking" => Ok(Self::Thinking),
            "starting" => Ok(Self::Starting),
            "paused" => Ok(Self::Paused),
            "done" => Ok(Self::Done),
            "offline" => Ok(Self::Offline),
            _ => Err(ParseError::UnknownStatus(s.to_owned())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KultiStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<u32>,
}

impl KultiStats {
    pub fn files(n: u32) -> Self {
        Self {
            files: Some(n),
            commands: None,
        }
    }

    pub fn commands(n: u32) -> Self {
        Self {
            files: None,
            commands: Some(n),
        }
    }
}

// ─── Payload ──────────────────────────────────────────────────────

/// Everything a classifier or SDK call can contribute to one wire event.
/// `None` fields stay off the wire entirely.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<KultiThought>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<KultiCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<KultiDiff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<Vec<KultiTerminalLine>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_append: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AgentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<KultiStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<KultiGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<KultiMilestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<KultiPreview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<KultiError>,
}

/// The wire event. Only the delivery client mints full payloads, so
/// `agent_id` is present on every event that leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KultiPayload {
    pub agent_id: String,
    #[serde(flatten)]
    pub fragment: PayloadFragment,
}

// ─── Tool events ──────────────────────────────────────────────────

/// Phase of a tool invocation relative to execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolPhase {
    Before,
    After,
}

/// Agent-agnostic representation of a tool event. Each adapter normalizes
/// its native hook format into this shape before classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedToolEvent {
    pub tool_name: String,
    pub phase: ToolPhase,
    #[serde(default)]
    pub params: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

/// Closed set of tool-capability tags every runtime's native tool names
/// normalize into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum CanonicalTool {
    Exec,
    WriteFile,
    EditFile,
    ReadFile,
    Search,
    Browser,
    WebFetch,
    WebSearch,
    Memory,
    Delegate,
    Unknown,
}

impl CanonicalTool {
    pub const ALL: [Self; 11] = [
        Self::Exec,
        Self::WriteFile,
        Self::EditFile,
        Self::ReadFile,
        Self::Search,
        Self::Browser,
        Self::WebFetch,
        Self::WebSearch,
        Self::Memory,
        Self::Delegate,
        Self::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exec => "exec",
            Self::WriteFile => "write_file",
            Self::EditFile => "edit_file",
            Self::ReadFile => "read_file",
            Self::Search => "search",
            Self::Browser => "browser",
            Self::WebFetch => "web_fetch",
            Self::WebSearch => "web_search",
            Self::Memory => "memory",
            Self::Delegate => "delegate",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CanonicalTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Error ────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown thought type: {0}")]
    UnknownThoughtType(String),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("unknown code action: {0}")]
    UnknownCodeAction(String),
}

// ─── Tests ────────────────────────────────────────────────────────
