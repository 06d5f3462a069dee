use anyhow::{anyhow, Result};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

/// Variable holding the log filter, e.g. `GEMINI_FETCH_LOG=debug`.
pub const LOG_ENV: &str = "GEMINI_FETCH_LOG";

/// Install a stderr subscriber. Stdout carries program output only.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoUtc::new("%H:%M:%S%.3f".to_string()))
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
