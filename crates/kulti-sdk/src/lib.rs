//! kulti-sdk: stream your AI agent to the world.
//!
//! ```no_run
//! use kulti_sdk::Kulti;
//!
//! # async fn demo() {
//! let stream = Kulti::new("my-agent");
//!
//! stream.think("Working on the problem...").await;
//! stream.reason("Need to check error logs because the deploy failed").await;
//! stream.decide("Using Rust for the rewrite").await;
//! stream.code("app.py", "print('hello')", kulti_sdk::CodeAction::Write).await;
//! stream.live().await;
//! # }
//! ```

use std::str::FromStr;

use kulti_classify::get_language;
use kulti_client::{KultiClient, KultiClientConfig};
use kulti_types::{
    AgentStatus, KultiCode, KultiGoal, KultiMilestone, KultiPreview, KultiThought, ParseError,
    PayloadFragment, ThoughtType,
};
use serde_json::{Map, Value};

/// Production ingest endpoint used when no server override is given.
pub const DEFAULT_SERVER_URL: &str = "https://kulti-stream.fly.dev";

/// SDK deliveries wait for the attempt to finish, so the timeout is looser
/// than the 2s hook path.
const SDK_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone)]
pub struct KultiConfig {
    /// Your unique agent ID.
    pub agent_id: String,
    /// Server URL override (defaults to production).
    pub server: Option<String>,
    /// API key for private streams.
    pub api_key: Option<String>,
    /// Per-request timeout override in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Log swallowed delivery failures at warn level.
    pub debug: bool,
}

impl KultiConfig {
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            server: None,
            api_key: None,
            timeout_ms: None,
            debug: false,
        }
    }
}

/// What a code stream does to the file. `Delete` exists for upstream
/// callers but is normalized to a write before it reaches the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CodeAction {
    #[default]
    Write,
    Edit,
    Delete,
}

impl CodeAction {
    fn to_wire(self) -> kulti_types::CodeAction {
        match self {
            Self::Edit => kulti_types::CodeAction::Edit,
            Self::Write | Self::Delete => kulti_types::CodeAction::Write,
        }
    }
}

impl FromStr for CodeAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "write" => Ok(Self::Write),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            _ => Err(ParseError::UnknownCodeAction(s.to_owned())),
        }
    }
}

/// High-level streaming handle for one agent.
#[derive(Debug, Clone)]
pub struct Kulti {
    agent_id: String,
    client: KultiClient,
}

impl Kulti {
    /// Connect to the production ingest endpoint.
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self::with_config(KultiConfig::new(agent_id))
    }

    pub fn with_config(config: KultiConfig) -> Self {
        let server = config
            .server
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned());
        let mut client_config = KultiClientConfig::new(server, config.agent_id.clone());
        client_config.timeout_ms = config.timeout_ms.unwrap_or(SDK_TIMEOUT_MS);
        client_config.api_key = config.api_key;
        client_config.debug = config.debug;

        Self {
            agent_id: config.agent_id,
            client: KultiClient::new(client_config),
        }
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Watch page for this agent.
    pub fn watch_url(&self) -> String {
        format!("https://kulti.club/{}", self.agent_id)
    }

    /// Profile page for this agent.
    pub fn profile_url(&self) -> String {
        format!("https://kulti.club/{}/profile", self.agent_id)
    }

    async fn send_thought(&self, thought_type: ThoughtType, text: &str, metadata: Map<String, Value>) {
        self.client
            .post(PayloadFragment {
                thought: Some(KultiThought {
                    thought_type,
                    content: text.to_owned(),
                    priority: None,
                    metadata,
                }),
                ..PayloadFragment::default()
            })
            .await;
    }

    /// Stream a general thought.
    pub async fn think(&self, text: &str) {
        self.send_thought(ThoughtType::General, text, Map::new()).await;
    }

    /// Stream reasoning: why you're doing something.
    pub async fn reason(&self, text: &str) {
        self.send_thought(ThoughtType::Reasoning, text, Map::new()).await;
    }

    /// Stream a decision you've made.
    pub async fn decide(&self, text: &str) {
        self.send_thought(ThoughtType::Decision, text, Map::new()).await;
    }

    /// Stream an observation: something you noticed.
    pub async fn observe(&self, text: &str) {
        self.send_thought(ThoughtType::Observation, text, Map::new()).await;
    }

    /// Stream a prompt you're crafting.
    pub async fn prompt(&self, text: &str) {
        self.send_thought(ThoughtType::Prompt, text, Map::new()).await;
    }

    /// Stream confusion: when you don't understand something.
    pub async fn confuse(&self, text: &str) {
        self.send_thought(ThoughtType::Confusion, text, Map::new()).await;
    }

    /// Stream an evaluation, optionally with the options being weighed
    /// and the one chosen.
    pub async fn evaluate(&self, text: &str, options: Option<&[String]>, chosen: Option<&str>) {
        let mut metadata = Map::new();
        if let Some(options) = options {
            metadata.insert(
                "options".to_owned(),
                Value::Array(options.iter().map(|o| Value::String(o.clone())).collect()),
            );
        }
        if let Some(chosen) = chosen {
            metadata.insert("chosen".to_owned(), Value::String(chosen.to_owned()));
        }
        self.send_thought(ThoughtType::Evaluation, text, metadata).await;
    }

    /// Stream context loading, optionally tagged with a file.
    pub async fn context(&self, text: &str, file: Option<&str>) {
        let mut metadata = Map::new();
        if let Some(file) = file {
            metadata.insert("file".to_owned(), Value::String(file.to_owned()));
        }
        self.send_thought(ThoughtType::Context, text, metadata).await;
    }

    /// Stream tool usage, optionally tagged with the tool name.
    pub async fn tool(&self, text: &str, tool_name: Option<&str>) {
        let mut metadata = Map::new();
        if let Some(tool_name) = tool_name {
            metadata.insert("tool".to_owned(), Value::String(tool_name.to_owned()));
        }
        self.send_thought(ThoughtType::Tool, text, metadata).await;
    }

    /// Stream code. Language is detected from the filename.
    pub async fn code(&self, filename: &str, content: &str, action: CodeAction) {
        self.client
            .post(PayloadFragment {
                code: Some(KultiCode {
                    filename: filename.to_owned(),
                    language: get_language(filename).to_owned(),
                    content: content.to_owned(),
                    action: action.to_wire(),
                }),
                stats: Some(kulti_types::KultiStats::files(1)),
                ..PayloadFragment::default()
            })
            .await;
    }

    /// Set agent status.
    pub async fn status(&self, status: AgentStatus) {
        self.client
            .post(PayloadFragment {
                status: Some(status),
                ..PayloadFragment::default()
            })
            .await;
    }

    /// Go live.
    pub async fn live(&self) {
        self.status(AgentStatus::Live).await;
    }

    /// Set the current task.
    pub async fn task(&self, title: &str, description: Option<&str>) {
        let mut metadata = Map::new();
        if let Some(description) = description {
            metadata.insert(
                "description".to_owned(),
                Value::String(description.to_owned()),
            );
        }
        self.client
            .post(PayloadFragment {
                thought: Some(KultiThought {
                    thought_type: ThoughtType::General,
                    content: title.to_owned(),
                    priority: None,
                    metadata,
                }),
                status: Some(AgentStatus::Working),
                ..PayloadFragment::default()
            })
            .await;
    }

    /// Declare the session goal.
    pub async fn goal(&self, title: &str, description: Option<&str>) {
        self.client
            .post(PayloadFragment {
                goal: Some(KultiGoal {
                    title: title.to_owned(),
                    description: description.map(str::to_owned),
                }),
                ..PayloadFragment::default()
            })
            .await;
    }

    /// Record a milestone.
    pub async fn milestone(&self, label: &str, completed: bool) {
        self.client
            .post(PayloadFragment {
                milestone: Some(KultiMilestone {
                    label: label.to_owned(),
                    completed,
                }),
                ..PayloadFragment::default()
            })
            .await;
    }

    /// Set the live-preview URL for what the agent is building.
    pub async fn preview(&self, url: &str) {
        self.client
            .post(PayloadFragment {
                preview: Some(KultiPreview {
                    url: url.to_owned(),
                }),
                ..PayloadFragment::default()
            })
            .await;
    }

    /// Raw escape hatch: ship an arbitrary fragment.
    pub async fn send(&self, fragment: PayloadFragment) {
        self.client.post(fragment).await;
    }
}
