use std::io::Write;

use crate::error::Result;
use crate::gemini::{candidate_text, ContentGenerator};
use crate::skill_tree::parse_skill_tree;

const EXPLAIN_PROMPT: &str = "Explain how AI works in a few words";

const SKILL_TREE_PROMPT: &str = "Generate a fishing skill tree. Respond with ONLY this exact JSON, no extra text, no other keys:
              {\"nodes\": [{\"name\": \"skill name\"}]}";

/// Which of the two request programs is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Print the response envelope only.
    Explain,
    /// Print the envelope, then the skill tree embedded in the candidate text.
    SkillTree,
}

impl Variant {
    pub fn prompt(&self) -> &'static str {
        match self {
            Variant::Explain => EXPLAIN_PROMPT,
            Variant::SkillTree => SKILL_TREE_PROMPT,
        }
    }

    /// Binary name, used in the missing-key hint.
    pub fn program(&self) -> &'static str {
        match self {
            Variant::Explain => "gemini-fetch",
            Variant::SkillTree => "skill-tree",
        }
    }
}

/// Send the variant's prompt once and write the results to `out`.
pub async fn run<G, W>(generator: &G, variant: Variant, out: &mut W) -> Result<()>
where
    G: ContentGenerator + Sync + ?Sized,
    W: Write,
{
    tracing::debug!(client = generator.client_name(), ?variant, "running request");

    let envelope = generator.generate_content(variant.prompt()).await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&envelope)?)?;

    if variant == Variant::SkillTree {
        let text = candidate_text(&envelope)?;
        let tree = parse_skill_tree(&text).inspect_err(|err| {
            tracing::warn!(text = err.text(), "candidate text is not a skill tree");
        })?;
        tree.render(out)?;
    }

    out.flush()?;
    Ok(())
}
