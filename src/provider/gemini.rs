//! Google Gemini API provider
//!
//! Calls the generateContent endpoint; the API key travels in the URL query
//! string rather than a header.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{PromptrError, Result};
use crate::provider::client::{Provider, ProviderSettings};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const DEFAULT_MODEL: &str = "gemini-pro";
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Google Gemini generateContent client
///
/// Registered under the identifier "google".
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    settings: ProviderSettings,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    text: Option<String>,
}

impl GeminiProvider {
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
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        log::debug!("Querying Gemini model {}", self.settings.model);

        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.settings.model, self.api_key
        );

        let mut generation_config = json!({
            "maxOutputTokens": self.settings.max_tokens
        });
        if let Some(temperature) = self.settings.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": generation_config
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
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

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| PromptrError::provider(self.name(), format!("Invalid response: {}", e)))?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| PromptrError::provider(self.name(), "Response contained no candidates"))
    }
}
