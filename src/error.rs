use thiserror::Error;

use crate::skill_tree::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a run after the process has started.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing {var}. Run: {var}=your_key {program}")]
    MissingCredential { var: String, program: String },

    #[error("Request failed: {status} {body}")]
    RequestFailed { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response has no candidates[0].content.parts[0].text")]
    MissingCandidateText,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = Error::MissingCredential {
            var: "GEMINI_API_KEY".to_string(),
            program: "gemini-fetch".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing GEMINI_API_KEY. Run: GEMINI_API_KEY=your_key gemini-fetch"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_request_failed_message() {
        let err = Error::RequestFailed {
            status: 429,
            body: "{\"error\":\"quota\"}".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed: 429 {\"error\":\"quota\"}");
        assert_ne!(err.exit_code(), 0);
    }
}
