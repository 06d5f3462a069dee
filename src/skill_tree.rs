use std::io::Write;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json|```").expect("code fence pattern is valid"));

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SkillTree {
    pub nodes: Vec<SkillNode>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SkillNode {
    pub name: String,
}

/// Model output that could not be read as a skill tree.
#[derive(Debug, Error)]
#[error("Model output is not a valid skill tree: {source}")]
pub struct ParseError {
    #[source]
    source: serde_json::Error,
    text: String,
}

impl ParseError {
    /// The fence-stripped text that failed to parse.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl SkillTree {
    /// Node count, then one node name per line.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.nodes.len())?;
        for node in &self.nodes {
            writeln!(out, "{}", node.name)?;
        }
        Ok(())
    }
}

/// Remove markdown code fences (```` ```json ```` and ```` ``` ````) and trim.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

pub fn parse_skill_tree(text: &str) -> Result<SkillTree, ParseError> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(&cleaned).map_err(|source| ParseError {
        source,
        text: cleaned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n[]\n```  "), "[]");
        assert_eq!(strip_code_fences("  {\"nodes\":[]} "), "{\"nodes\":[]}");
        // Fences in the middle of the text go too.
        assert_eq!(strip_code_fences("a```b```json c"), "ab c");
    }

    #[test]
    fn test_parse_fenced_tree() {
        let tree =
            parse_skill_tree("```json\n{\"nodes\":[{\"name\":\"Cast\"},{\"name\":\"Reel\"}]}\n```")
                .unwrap();
        assert_eq!(tree.nodes.len(), 2);
        assert_eq!(tree.nodes[0].name, "Cast");
        assert_eq!(tree.nodes[1].name, "Reel");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let tree = parse_skill_tree(
            "{\"nodes\":[{\"name\":\"Knot Tying\",\"level\":2}],\"title\":\"Fishing\"}",
        )
        .unwrap();
        assert_eq!(tree.nodes, vec![SkillNode { name: "Knot Tying".to_string() }]);
    }

    #[test]
    fn test_parse_error_is_tagged() {
        let err = parse_skill_tree("```json\nHere is your tree: nodes...\n```").unwrap_err();
        assert_eq!(err.text(), "Here is your tree: nodes...");
        assert!(err.to_string().starts_with("Model output is not a valid skill tree"));
    }

    #[test]
    fn test_parse_error_on_wrong_shape() {
        assert!(parse_skill_tree("{\"nodes\": \"Cast\"}").is_err());
        assert!(parse_skill_tree("{\"nodes\": [{\"title\": \"Cast\"}]}").is_err());
    }

    #[test]
    fn test_render() {
        let tree = SkillTree {
            nodes: vec![
                SkillNode { name: "Cast".to_string() },
                SkillNode { name: "Reel".to_string() },
            ],
        };
        let mut out = Vec::new();
        tree.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\nCast\nReel\n");
    }

    #[test]
    fn test_render_empty() {
        let mut out = Vec::new();
        SkillTree { nodes: vec![] }.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\n");
    }
}
