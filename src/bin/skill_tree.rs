use std::process::ExitCode;

use anyhow::Result;
use gemini_fetch::{app, Variant};

// Same request flow as `gemini-fetch`, plus skill tree extraction from the reply.
#[tokio::main]
async fn main() -> Result<ExitCode> {
    app::launch(Variant::SkillTree).await
}
