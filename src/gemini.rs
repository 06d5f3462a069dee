use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

/// Anything that can turn a prompt into a `generateContent` response envelope.
#[async_trait]
pub trait ContentGenerator {
    /// Send one prompt and return the raw response envelope.
    async fn generate_content(&self, prompt: &str) -> Result<serde_json::Value>;

    /// Name of the backend (for log output).
    fn client_name(&self) -> &str;
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A request holding a single user prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
                role: None,
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "modelVersion", skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Candidate {
    pub content: Content,
    #[serde(rename = "finishReason", skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<serde_json::Value> {
        let request = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(endpoint = %self.endpoint, "sending generateContent request");
        if let Ok(request_json) = serde_json::to_string_pretty(&request) {
            tracing::trace!(payload = %request_json, "request payload");
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(status = status.as_u16(), "generateContent request failed");
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<serde_json::Value> {
        self.generate_content(prompt).await
    }

    fn client_name(&self) -> &str {
        "Gemini"
    }
}

/// Text of the first part of the first candidate.
pub fn candidate_text(envelope: &serde_json::Value) -> Result<String> {
    let response: GenerateContentResponse =
        serde_json::from_value(envelope.clone()).map_err(|_| Error::MissingCandidateText)?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or(Error::MissingCandidateText)
}
