//! Provider Gateway - registry dispatching provider identifiers to clients
//!
//! The gateway maps a per-request provider identifier to a registered
//! Provider implementation. New providers are added by registration, not by
//! touching call sites. An unrecognized identifier fails before any network
//! attempt.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{PromptrError, Result};
use crate::provider::client::Provider;

/// Registry of providers keyed by identifier
#[derive(Default)]
pub struct ProviderGateway {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderGateway {
    /// Create an empty gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name; an existing registration
    /// for the same identifier is replaced
    pub fn register(&mut self, provider: Arc<dyn Provider>) {
        let name = provider.name().to_string();
        log::debug!("Registered provider '{}'", name);
        self.providers.insert(name, provider);
    }

    /// Whether a provider identifier is registered
    pub fn contains(&self, provider_id: &str) -> bool {
        self.providers.contains_key(provider_id)
    }

    /// All registered provider identifiers, sorted
    pub fn provider_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.providers.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Dispatch a compiled prompt to the named provider
    ///
    /// # Errors
    /// `UnsupportedProvider` if the identifier is not registered;
    /// otherwise whatever `Provider` error the client normalized.
    pub async fn complete(&self, provider_id: &str, prompt: &str) -> Result<String> {
        let provider = self
            .providers
            .get(provider_id)
            .ok_or_else(|| PromptrError::UnsupportedProvider(provider_id.to_string()))?;

        log::debug!(
            "Dispatching {} character prompt to provider '{}'",
            prompt.len(),
            provider_id
        );
        provider.complete(prompt).await
    }
}
