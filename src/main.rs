use std::process::ExitCode;

use anyhow::Result;
use gemini_fetch::{app, Variant};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    app::launch(Variant::Explain).await
}
