use std::io::{self, Write};
use std::process::ExitCode;

use dotenv::dotenv;

use crate::config::Config;
use crate::error::Result;
use crate::gemini::GeminiClient;
use crate::logging;
use crate::runner::{self, Variant};

/// Check the configuration, then send the single request.
///
/// A missing API key returns before any client exists, so nothing goes out
/// on the network.
pub async fn execute<F, W>(lookup: F, variant: Variant, out: &mut W) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let config = Config::from_lookup(lookup, variant.program())?;
    send(&config, variant, out).await
}

async fn send<W: Write>(config: &Config, variant: Variant, out: &mut W) -> Result<()> {
    tracing::debug!(?config, "configuration loaded");

    let client = GeminiClient::new(config);
    runner::run(&client, variant, out).await
}

/// Write a failed run's message to `err` and pick the exit code.
pub fn report<W: Write>(result: Result<()>, err: &mut W) -> io::Result<u8> {
    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            writeln!(err, "{}", e)?;
            Ok(e.exit_code())
        }
    }
}

/// Process entry shared by both binaries.
pub async fn launch(variant: Variant) -> anyhow::Result<ExitCode> {
    dotenv().ok();
    logging::init()?;

    let mut stdout = io::stdout();
    let result = match Config::from_env(variant.program()) {
        Ok(config) => send(&config, variant, &mut stdout).await,
        Err(e) => Err(e),
    };
    stdout.flush()?;

    let code = report(result, &mut io::stderr())?;
    Ok(ExitCode::from(code))
}
