//! CLI definition using clap derive.

use clap::{Parser, Subcommand};
use kulti_sdk::{Kulti, KultiConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kulti", about = "Stream your AI agent to the world")]
pub struct Cli {
    /// State server URL (default: production ingest)
    #[arg(long, global = true, env = "KULTI_STATE_SERVER")]
    pub server: Option<String>,

    /// API key for private streams
    #[arg(long, global = true, env = "KULTI_API_KEY")]
    pub api_key: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Log swallowed delivery failures at warn level
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Build a streaming handle for `agent_id` from the global flags.
    pub fn stream(&self, agent_id: &str) -> Kulti {
        let mut config = KultiConfig::new(agent_id);
        config.server = self.server.clone();
        config.api_key = self.api_key.clone();
        config.timeout_ms = self.timeout_ms;
        config.debug = self.debug;
        Kulti::with_config(config)
    }

    /// The ingest URL the global flags resolve to.
    pub fn server_url(&self) -> String {
        self.server
            .clone()
            .unwrap_or_else(|| kulti_sdk::DEFAULT_SERVER_URL.to_owned())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Stream a general thought
    Think(ThoughtOpts),
    /// Stream reasoning: why you're doing something
    Reason(ThoughtOpts),
    /// Stream a decision you've made
    Decide(ThoughtOpts),
    /// Stream an observation: something you noticed
    Observe(ThoughtOpts),
    /// Stream an evaluation, optionally weighing options
    Evaluate(EvaluateOpts),
    /// Stream context loading
    Context(ContextOpts),
    /// Stream tool usage
    Tool(ToolOpts),
    /// Stream a prompt
    Prompt(ThoughtOpts),
    /// Stream a code file from disk
    Code(CodeOpts),
    /// Set agent status
    Status(StatusOpts),
    /// Go live
    Live(AgentOpts),
    /// Set the current task
    Task(TaskOpts),
    /// Probe state-server connectivity
    Check,
    /// Classify one normalized tool event from stdin and ship it
    Hook(AgentOpts),
}

#[derive(clap::Args)]
pub struct ThoughtOpts {
    /// Agent ID
    pub agent: String,
    /// Text to stream
    pub text: String,
}

#[derive(clap::Args)]
pub struct EvaluateOpts {
    /// Agent ID
    pub agent: String,
    /// Text to stream
    pub text: String,
    /// Options being weighed, pipe-separated: "A|B|C"
    #[arg(long)]
    pub options: Option<String>,
    /// The option chosen
    #[arg(long)]
    pub chosen: Option<String>,
}

#[derive(clap::Args)]
pub struct ContextOpts {
    /// Agent ID
    pub agent: String,
    /// Text to stream
    pub text: String,
    /// File being loaded
    pub file: Option<String>,
}

#[derive(clap::Args)]
pub struct ToolOpts {
    /// Agent ID
    pub agent: String,
    /// Text to stream
    pub text: String,
    /// Tool name
    pub tool_name: Option<String>,
}

#[derive(clap::Args)]
pub struct CodeOpts {
    /// Agent ID
    pub agent: String,
    /// File to stream
    pub file: PathBuf,
    /// write | edit | delete
    #[arg(default_value = "write")]
    pub action: String,
}

#[derive(clap::Args)]
pub struct StatusOpts {
    /// Agent ID
    pub agent: String,
    /// live | working | thinking | starting | paused | done | offline
    pub status: String,
}

#[derive(clap::Args)]
pub struct TaskOpts {
    /// Agent ID
    pub agent: String,
    /// Task title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
}

#[derive(clap::Args)]
pub struct AgentOpts {
    /// Agent ID
    pub agent: String,
}
