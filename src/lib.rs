pub mod app;
pub mod config;
pub mod error;
pub mod gemini;
pub mod logging;
pub mod mock;
pub mod runner;
pub mod skill_tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use gemini::{ContentGenerator, GeminiClient};
pub use mock::{MockGenerator, MockReply};
pub use runner::Variant;
pub use skill_tree::{ParseError, SkillNode, SkillTree};
