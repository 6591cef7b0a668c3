//! Line-oriented control interface.
//!
//! Each non-empty line read from stdin is pushed through the shared
//! broadcaster and answered with a human-readable status summary, so an
//! operator or an external tool wrapper can trigger pushes without going
//! through the HTTP API.

use log::{error, info};
use service::{broadcast, AppState};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Push one message to every connected receiver and render the status
/// summary, including the management URL constructed from `host`/`port`.
pub(crate) async fn push_message(
    state: &AppState,
    message: &str,
    host: &str,
    port: u16,
) -> domain::Result<String> {
    let outcome = broadcast::push(state, message).await?;

    Ok(format!(
        "Message pushed successfully!\n\
         \n\
         Details:\n\
         - Message: {}\n\
         - Timestamp: {}\n\
         - Stream clients connected: {}\n\
         - Webhooks notified: {}/{}\n\
         - Server: http://{host}:{port}\n\
         \n\
         To manage webhooks, open http://{host}:{port} in a browser.\n\
         Register webhooks via POST to http://{host}:{port}/api/register with {{\"webhook_url\": \"your_url\"}}",
        outcome.message.text,
        outcome.message.timestamp_rfc3339(),
        outcome.clients,
        outcome.webhooks_notified,
        outcome.total_webhooks,
    ))
}

/// Run the control loop until stdin closes. Each non-empty line is one
/// push; errors are reported per line without ending the loop.
pub(crate) async fn run(state: AppState) {
    let host = state.config.host.clone();
    let port = state.config.port;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Control interface ready: one message per line on stdin");

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let message = line.trim();
                if message.is_empty() {
                    continue;
                }
                match push_message(&state, message, &host, port).await {
                    Ok(summary) => println!("{summary}"),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Ok(None) => {
                info!("Control interface input closed");
                break;
            }
            Err(e) => {
                error!("Failed to read control input: {e}");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use service::Config;

    #[tokio::test]
    async fn summary_reports_counts_and_management_url() {
        let state = AppState::new(Config::parse_from(["webstream_platform_rs"])).unwrap();

        let summary = push_message(&state, "hello", "0.0.0.0", 8000).await.unwrap();
        assert!(summary.contains("- Message: hello"));
        assert!(summary.contains("- Stream clients connected: 0"));
        assert!(summary.contains("- Webhooks notified: 0/0"));
        assert!(summary.contains("http://0.0.0.0:8000"));
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let state = AppState::new(Config::parse_from(["webstream_platform_rs"])).unwrap();
        assert!(push_message(&state, "  ", "0.0.0.0", 8000).await.is_err());
    }
}
