//! Mock provider for tests and credential-free local runs

use async_trait::async_trait;

use crate::error::{PromptrError, Result};
use crate::provider::client::Provider;

/// Deterministic in-process provider; issues no network calls
pub struct MockProvider {
    name: String,
    response: Option<String>,
    fail_with: Option<String>,
}

impl MockProvider {
    /// Create a mock that echoes the prompt back
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            response: None,
            fail_with: None,
        }
    }

    /// Create a mock registered under a specific identifier
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Always return this canned response
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }

    /// Always fail with a provider error carrying this message
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        if let Some(message) = &self.fail_with {
            return Err(PromptrError::provider(self.name(), message.clone()));
        }
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Ok(format!("Mock response for prompt: {}", prompt)),
        }
    }
}
