use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::error::{Error, Result};
use crate::gemini::ContentGenerator;

/// A scripted reply handed out by [`MockGenerator`].
#[derive(Debug, Clone)]
pub enum MockReply {
    Envelope(serde_json::Value),
    Failure { status: u16, body: String },
}

/// In-memory stand-in for the Gemini API, useful for testing without network calls.
#[derive(Debug, Default)]
pub struct MockGenerator {
    replies: Mutex<VecDeque<MockReply>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that answers every prompt with the given envelopes, in order.
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Mock whose single reply carries `text` as the first candidate.
    pub fn with_candidate_text(text: &str) -> Self {
        Self::with_replies(vec![MockReply::Envelope(envelope_with_text(text))])
    }

    /// Mock whose single reply is an HTTP failure.
    pub fn with_failure(status: u16, body: &str) -> Self {
        Self::with_replies(vec![MockReply::Failure {
            status,
            body: body.to_string(),
        }])
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }
}

/// A minimal successful `generateContent` envelope.
pub fn envelope_with_text(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "modelVersion": "gemini-3-flash-preview"
    })
}

#[async_trait]
impl ContentGenerator for MockGenerator {
    async fn generate_content(&self, prompt: &str) -> Result<serde_json::Value> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut replies| replies.pop_front());

        match reply {
            Some(MockReply::Envelope(envelope)) => Ok(envelope),
            Some(MockReply::Failure { status, body }) => {
                Err(Error::RequestFailed { status, body })
            }
            None => Ok(envelope_with_text("Mock: no replies configured")),
        }
    }

    fn client_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_in_order() {
        let mock = MockGenerator::with_replies(vec![
            MockReply::Envelope(envelope_with_text("first")),
            MockReply::Failure {
                status: 500,
                body: "boom".to_string(),
            },
        ]);

        let first = mock.generate_content("a").await.unwrap();
        assert_eq!(first["candidates"][0]["content"]["parts"][0]["text"], "first");

        let second = mock.generate_content("b").await.unwrap_err();
        assert!(matches!(second, Error::RequestFailed { status: 500, .. }));

        assert_eq!(mock.prompts(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_default_reply() {
        let mock = MockGenerator::new();
        let envelope = mock.generate_content("hello").await.unwrap();
        assert!(envelope["candidates"].is_array());
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.client_name(), "Mock");
    }
}
