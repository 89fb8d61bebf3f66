//! OpenAI API provider
//!
//! Calls the chat completions endpoint with the compiled prompt as a single
//! user message.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{PromptrError, Result};
use crate::provider::client::{Provider, ProviderSettings};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TEMPERATURE: f32 = 0.1;

/// OpenAI chat completions client
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    settings: ProviderSettings,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider with the default model parameters
    pub fn new(api_key: String) -> Self {
        Self::with_settings(
            api_key,
            ProviderSettings::new(DEFAULT_MODEL, DEFAULT_MAX_TOKENS, Some(DEFAULT_TEMPERATURE)),
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
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        log::debug!("Querying OpenAI model {}", self.settings.model);

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
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
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

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| PromptrError::provider(self.name(), format!("Invalid response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| PromptrError::provider(self.name(), "Response contained no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let provider = OpenAiProvider::new("key".to_string());
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.settings.model, "gpt-4");
        assert_eq!(provider.settings.max_tokens, 1000);
        assert_eq!(provider.settings.temperature, Some(0.1));
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": "hello"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_response_parsing_empty_choices() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
