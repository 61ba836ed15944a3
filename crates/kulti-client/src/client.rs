//! HTTP delivery client. Sends are timeout-bounded and every transport
//! failure is swallowed so hanging requests can't block tool hooks.

use std::time::Duration;

use kulti_types::{
    AgentStatus, KultiCode, KultiPayload, KultiStats, KultiTerminalLine, KultiThought,
    PayloadFragment,
};

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct KultiClientConfig {
    pub state_server_url: String,
    pub agent_id: String,
    pub timeout_ms: u64,
    /// Sent as `X-Kulti-Key` when set.
    pub api_key: Option<String>,
    /// Elevates swallowed delivery failures from debug to warn logs.
    pub debug: bool,
}

impl KultiClientConfig {
    pub fn new(state_server_url: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            state_server_url: state_server_url.into(),
            agent_id: agent_id.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            api_key: None,
            debug: false,
        }
    }
}

/// Delivery client for one agent. Holds only immutable configuration and
/// a shared connection pool; cheap to clone into spawned sends.
#[derive(Debug, Clone)]
pub struct KultiClient {
    http: reqwest::Client,
    config: KultiClientConfig,
}

impl KultiClient {
    pub fn new(config: KultiClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn agent_id(&self) -> &str {
        &self.config.agent_id
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    /// Deliver one payload fragment and wait for the attempt to finish.
    /// The fragment is merged with the configured `agent_id`; transport
    /// failures are logged and swallowed, and the response status is
    /// never inspected.
    pub async fn post(&self, fragment: PayloadFragment) {
        let payload = KultiPayload {
            agent_id: self.config.agent_id.clone(),
            fragment,
        };
        let url = format!("{}/hook", self.config.state_server_url);

        let mut request = self.http.post(&url).timeout(self.timeout()).json(&payload);
        if let Some(key) = &self.config.api_key {
            request = request.header("X-Kulti-Key", key);
        }

        if let Err(e) = request.send().await {
            if self.config.debug {
                tracing::warn!("kulti delivery to {url} failed: {e}");
            } else {
                tracing::debug!("kulti delivery to {url} failed: {e}");
            }
        }
    }

    /// Fire-and-forget dispatch: detach the delivery and return
    /// immediately. The hot path for tool hooks; the caller never
    /// observes the outcome. Must be called from within a tokio runtime.
    pub fn send(&self, fragment: PayloadFragment) {
        let client = self.clone();
        tokio::spawn(async move { client.post(fragment).await });
    }

    /// Ship a narrated thought, optionally updating agent status.
    pub fn thought(&self, thought: KultiThought, status: Option<AgentStatus>) {
        self.send(PayloadFragment {
            thought: Some(thought),
            status,
            ..PayloadFragment::default()
        });
    }

    /// Ship a code artifact; counts one file toward session stats.
    pub fn code(&self, code: KultiCode) {
        self.send(PayloadFragment {
            code: Some(code),
            stats: Some(KultiStats::files(1)),
            ..PayloadFragment::default()
        });
    }

    /// Ship terminal lines; counts one command unless stats are given.
    pub fn terminal(&self, lines: Vec<KultiTerminalLine>, append: bool, stats: Option<KultiStats>) {
        self.send(PayloadFragment {
            terminal: Some(lines),
            terminal_append: Some(append),
            stats: Some(stats.unwrap_or_else(|| KultiStats::commands(1))),
            ..PayloadFragment::default()
        });
    }
}

/// Result of a connectivity probe. Reported as data, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub ok: bool,
    pub error: Option<String>,
}

/// Probe `GET {state_server_url}/health`. Any 2xx is healthy. Startup
/// diagnostics only; never called on the delivery path.
pub async fn validate_connection(state_server_url: &str, timeout: Duration) -> ConnectionStatus {
    let url = format!("{state_server_url}/health");
    let client = reqwest::Client::new();

    match client.get(&url).timeout(timeout).send().await {
        Ok(resp) if resp.status().is_success() => ConnectionStatus {
            ok: true,
            error: None,
        },
        Ok(resp) => ConnectionStatus {
            ok: false,
            error: Some(format!("health check returned {}", resp.status())),
        },
        Err(e) => ConnectionStatus {
            ok: false,
            error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kulti_types::{ThoughtType, TerminalLineType};
    use serde_json::Map;

    fn unreachable_client(debug: bool) -> KultiClient {
        // Port 9 (discard) is closed in test environments; connections
        // are refused immediately.
        let mut config = KultiClientConfig::new("http://127.0.0.1:9", "test-agent");
        config.timeout_ms = 250;
        config.debug = debug;
        KultiClient::new(config)
    }

    #[test]
    fn config_defaults() {
        let config = KultiClientConfig::new("http://localhost:8766", "nex");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.api_key, None);
        assert!(!config.debug);
    }

    #[tokio::test]
    async fn post_swallows_unreachable_host() {
        let client = unreachable_client(false);
        // Completing at all is the contract: no panic, no error surfaced.
        client.post(PayloadFragment::default()).await;
    }

    #[tokio::test]
    async fn post_swallows_failures_in_debug_mode_too() {
        let client = unreachable_client(true);
        client.post(PayloadFragment::default()).await;
    }

    #[tokio::test]
    async fn send_returns_immediately() {
        let client = unreachable_client(false);
        client.send(PayloadFragment::default());
        client.thought(
            KultiThought {
                thought_type: ThoughtType::General,
                content: "hello".to_owned(),
                priority: None,
                metadata: Map::new(),
            },
            Some(AgentStatus::Working),
        );
        client.terminal(
            vec![KultiTerminalLine {
                line_type: TerminalLineType::Input,
                content: "$ ls".to_owned(),
            }],
            true,
            None,
        );
        // Detached sends race with runtime shutdown; nothing to await by
        // design.
    }

    #[tokio::test]
    async fn validate_connection_reports_unreachable() {
        let status =
            validate_connection("http://127.0.0.1:9", Duration::from_millis(250)).await;
        assert!(!status.ok);
        assert!(status.error.is_some());
        assert!(!status.error.expect("error message").is_empty());
    }
}
