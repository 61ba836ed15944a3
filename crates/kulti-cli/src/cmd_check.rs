//! `kulti check`: startup connectivity probe.

use kulti_client::validate_connection;
use std::time::Duration;

/// Returns a process exit code: 0 healthy, 1 unreachable.
pub async fn cmd_check(server_url: &str, timeout_ms: u64) -> i32 {
    let status = validate_connection(server_url, Duration::from_millis(timeout_ms)).await;
    if status.ok {
        println!("state server healthy: {server_url}");
        0
    } else {
        let detail = status
            .error
            .unwrap_or_else(|| "unknown failure".to_owned());
        println!("state server unreachable: {detail}");
        1
    }
}
