mod client;
pub(crate) mod types;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{AiError, Result};
use crate::traits::TextCompleter;

use client::{ClaudeClient, ANTHROPIC_API_URL};
use types::*;

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

const DEFAULT_MAX_TOKENS: u32 = 1024;

// =============================================================================
// Claude Agent
// =============================================================================

#[derive(Clone)]
pub struct Claude {
    api_key: String,
    pub(crate) model: String,
    max_tokens: u32,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl Claude {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AiError::Config("ANTHROPIC_API_KEY environment variable not set".into()))?;
        Ok(Self::new(api_key, model))
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn client(&self) -> ClaudeClient {
        let base_url = self.base_url.as_deref().unwrap_or(ANTHROPIC_API_URL);
        ClaudeClient::new(self.http.clone(), &self.api_key, base_url)
    }

    /// Send a single user prompt and return the text of the first content block.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(WireMessage::user(prompt))
            .max_tokens(self.max_tokens);

        let response = self.client().chat(&request).await?;

        debug!(
            model = %self.model,
            stop_reason = response.stop_reason.as_deref().unwrap_or("unknown"),
            input_tokens = response.usage.map(|u| u.input_tokens),
            output_tokens = response.usage.map(|u| u.output_tokens),
            "Claude completion finished"
        );

        match response.first_text() {
            Some(text) => Ok(text.to_string()),
            None => Err(AiError::UnexpectedResponse(
                response
                    .content
                    .first()
                    .map(|block| format!("first content block is {}", block.describe()))
                    .unwrap_or_else(|| "no content blocks".to_string()),
            )),
        }
    }
}

#[async_trait]
impl TextCompleter for Claude {
    async fn complete(&self, prompt: &str) -> Result<String> {
        Claude::complete(self, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claude_new() {
        let ai = Claude::new("sk-ant-test", DEFAULT_MODEL);
        assert_eq!(ai.model, DEFAULT_MODEL);
        assert_eq!(ai.api_key, "sk-ant-test");
        assert_eq!(ai.max_tokens, 1024);
    }

    #[test]
    fn test_claude_with_base_url() {
        let ai = Claude::new("sk-ant-test", DEFAULT_MODEL).with_base_url("https://custom.api.com");
        assert_eq!(ai.base_url, Some("https://custom.api.com".to_string()));
    }
}
