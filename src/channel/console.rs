//! Console channel: reads lines from stdin, prints replies to stdout.
//!
//! Shows the static greeting on start ("session started" event), then one
//! turn per line. Blank lines are skipped before the turn begins; the
//! assistant's own empty-input guard still covers other surfaces. Runs
//! until the `shutdown` token is cancelled (Ctrl-C) or stdin closes.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::assistant::{Assistant, GREETING};
use crate::error::AppError;
use super::Channel;

// ── ConsoleChannel ───────────────────────────────────────────────────────────

pub struct ConsoleChannel {
    channel_id: String,
}

impl ConsoleChannel {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self { channel_id: channel_id.into() }
    }
}

impl Channel for ConsoleChannel {
    fn id(&self) -> &str {
        &self.channel_id
    }

    fn run(
        self: Box<Self>,
        assistant: Arc<Assistant>,
        shutdown: CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'static>> {
        Box::pin(run_console(self.channel_id, assistant, shutdown))
    }
}

// ── run_console ──────────────────────────────────────────────────────────────

async fn run_console(
    channel_id: String,
    assistant: Arc<Assistant>,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    info!(%channel_id, "console channel started — type a message and press Enter. Ctrl-C to quit.");
    println!("─────────────────────────────────");
    println!(" Studymate console  (Ctrl-C to quit)");
    println!("─────────────────────────────────");
    println!("{GREETING}");

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print!("> ");
        use std::io::Write as _;
        let _ = std::io::stdout().flush();

        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                println!("\n[console] shutdown signal received — closing");
                info!("console channel shutting down");
                break;
            }

            line = lines.next_line() => {
                match line {
                    Err(e) => {
                        warn!("console read error: {e}");
                        break;
                    }
                    Ok(None) => {
                        info!("console stdin closed");
                        break;
                    }
                    Ok(Some(input)) => {
                        let input = input.trim().to_string();
                        if input.is_empty() { continue; }

                        debug!(input = %input, "console received line");

                        let reply = assistant.handle_turn(&input).await;
                        println!("{reply}");
                    }
                }
            }
        }
    }

    Ok(())
}
