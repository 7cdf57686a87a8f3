//! Blocking client for an OpenAI-compatible chat-completions API.

use bmc_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::TextGenerator;

/// Default chat-completions endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// A message in the chat-completion format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completion request body.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

/// A choice in the chat-completion response.
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Chat-completion response body.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Client for an OpenAI-compatible chat-completions API.
///
/// One synchronous round-trip per generation, no streaming, no retries.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Create a client.
    ///
    /// No request timeout is configured: a hang upstream hangs the
    /// enclosing request.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::Upstream(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        })
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OpenAiClient {
    fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature,
        };

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        log::debug!("POST {} (model {})", url, self.model);

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .map_err(|e| Error::Upstream(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Upstream(format!(
                "API error (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| Error::Upstream(format!("Failed to parse response: {e}")))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::Upstream(
                "Generation service returned no text".to_string(),
            ));
        }

        Ok(text)
    }
}
