//! Studymate — entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config and check required secrets (fatal if missing)
//!   3. Init logger at the configured level
//!   4. Build the LLM provider and router
//!   5. Run the console channel until Ctrl-C or stdin closes

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use studymate::assistant::Assistant;
use studymate::channel::{console::ConsoleChannel, Channel};
use studymate::config;
use studymate::error::AppError;
use studymate::llm::providers;
use studymate::logger;
use studymate::router::Router;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run() -> Result<(), AppError> {
    // Load .env if present; the file is optional.
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    config.validate()?;
    logger::parse_level(&config.assistant.log_level)?;
    logger::init(&config.assistant.log_level)?;

    info!(
        name = %config.assistant.name,
        provider = %config.llm.provider,
        max_input_chars = config.assistant.max_input_chars,
        "config loaded"
    );

    let provider = providers::build(&config.llm, config.llm_api_key.clone())?;
    let router = Router::new(provider);
    let assistant = Arc::new(Assistant::new(&config, router)?);

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let channel = Box::new(ConsoleChannel::new("console0"));
    info!(channel_id = channel.id(), "starting chat surface");
    channel.run(assistant, shutdown).await?;

    info!("shutdown complete");
    Ok(())
}
