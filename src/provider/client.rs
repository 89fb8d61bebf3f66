//! Provider trait and shared per-provider settings

use async_trait::async_trait;

use crate::error::Result;

/// Stateless text-completion capability - each call is independent
///
/// Implementations must normalize every underlying failure (network, HTTP
/// status, malformed response) into `PromptrError::Provider` carrying their
/// own name; no transport error type crosses this boundary.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Identifier this provider registers under (e.g. "openai")
    fn name(&self) -> &str;

    /// Send a compiled prompt and return the generated text
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Per-provider call parameters
///
/// Defaults are provider-specific constants; config may override them, they
/// are never caller-supplied per request.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl ProviderSettings {
    pub fn new(model: impl Into<String>, max_tokens: u32, temperature: Option<f32>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_construction() {
        let settings = ProviderSettings::new("gpt-4", 1000, Some(0.1));
        assert_eq!(settings.model, "gpt-4");
        assert_eq!(settings.max_tokens, 1000);
        assert_eq!(settings.temperature, Some(0.1));
    }
}
