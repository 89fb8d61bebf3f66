//! Anthropic API provider
//!
//! Calls the messages endpoint with the compiled prompt as a single user
//! message.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{PromptrError, Result};
use crate::provider::client::{Provider, ProviderSettings};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Anthropic messages API client
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    settings: ProviderSettings,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

impl AnthropicProvider {
    /// Create a provider with the default model parameters
    pub fn new(api_key: String) -> Self {
        Self::with_settings(
            api_key,
            ProviderSettings::new(DEFAULT_MODEL, DEFAULT_MAX_TOKENS, None),
        )
    }

    /// Create a provider with explicit settings
    pub fn with_settings(api_key: String, settings: ProviderSettings) -> Self {
        Self {
            client: Client::new(),
            api_key,
            settings,
        }
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        log::debug!("Querying Anthropic model {}", self.settings.model);

        let mut body = json!({
            "model": self.settings.model,
            "max_tokens": self.settings.max_tokens,
            "messages": [{"role": "user", "content": prompt}]
        });
        if let Some(temperature) = self.settings.temperature {
            body["temperature"] = json!(temperature);
        }

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| PromptrError::provider(self.name(), format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(PromptrError::provider(
                self.name(),
                format!("HTTP {}: {}", status, detail),
            ));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| PromptrError::provider(self.name(), format!("Invalid response: {}", e)))?;

        parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or_else(|| PromptrError::provider(self.name(), "Response contained no text block"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let provider = AnthropicProvider::new("key".to_string());
        assert_eq!(provider.name(), "anthropic");
        assert_eq!(provider.settings.model, "claude-3-sonnet-20240229");
        assert_eq!(provider.settings.max_tokens, 1000);
        assert_eq!(provider.settings.temperature, None);
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"content": [{"type": "text", "text": "answer"}]}"#;
        let parsed: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.content[0].text.as_deref(), Some("answer"));
    }

    #[test]
    fn test_response_parsing_skips_non_text_blocks() {
        let json = r#"{"content": [{"type": "tool_use"}, {"type": "text", "text": "later"}]}"#;
        let parsed: MessagesResponse = serde_json::from_str(json).unwrap();
        let text = parsed.content.into_iter().find_map(|b| b.text);
        assert_eq!(text.as_deref(), Some("later"));
    }
}
