//! Request Façade - map named operations onto templates and providers
//!
//! The PromptService owns the immutable TemplateStore and the
//! ProviderGateway. Each operation picks a template, builds the variable
//! bindings from caller-supplied fields, compiles, dispatches to the chosen
//! provider, and shapes a response envelope that echoes the bindings with
//! long values truncated for auditability.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::provider::ProviderGateway;
use crate::template::{Bindings, TemplateStore, compile};

/// Template used by the code review operation
pub const CODE_REVIEW_TEMPLATE: &str = "code-review-assistant";

/// Template used by the customer feedback operation
pub const CUSTOMER_FEEDBACK_TEMPLATE: &str = "customer-feedback-analyzer";

/// Provider used when the caller does not pick one
pub const DEFAULT_PROVIDER: &str = "openai";

/// Echoed binding values longer than this are cut to a preview
const PREVIEW_MAX_CHARS: usize = 100;

/// Ellipsis marker appended to truncated previews
const PREVIEW_MARKER: &str = "...";

/// Response envelope for a completed operation
#[derive(Debug, Clone, Serialize)]
pub struct PromptResponse {
    /// Name of the template that was compiled
    pub prompt_used: String,

    /// Provider identifier the prompt was dispatched to
    pub provider: String,

    /// Generated text returned by the provider
    pub result: String,

    /// Echo of the bindings, values truncated to a bounded preview
    pub variables: BTreeMap<String, String>,
}

/// The façade tying store, compiler, and gateway together
pub struct PromptService {
    store: TemplateStore,
    gateway: ProviderGateway,
}

impl PromptService {
    /// Create a service over a loaded store and configured gateway
    pub fn new(store: TemplateStore, gateway: ProviderGateway) -> Self {
        Self { store, gateway }
    }

    /// The template store, for listing and health reporting
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// The provider gateway, for introspection
    pub fn gateway(&self) -> &ProviderGateway {
        &self.gateway
    }

    /// Resolve a template, compile it with bindings, and dispatch to the
    /// named provider
    pub async fn execute(
        &self,
        template_name: &str,
        bindings: &Bindings,
        provider_id: &str,
    ) -> Result<String> {
        let document = self.store.get(template_name)?;
        let prompt = compile(document, bindings);
        log::info!(
            "Executing template '{}' via provider '{}' ({} chars compiled)",
            template_name,
            provider_id,
            prompt.len()
        );
        self.gateway.complete(provider_id, &prompt).await
    }

    /// Review code using the code review template
    pub async fn code_review(
        &self,
        code: &str,
        language: &str,
        provider: Option<&str>,
    ) -> Result<PromptResponse> {
        let provider_id = provider.unwrap_or(DEFAULT_PROVIDER);
        let mut bindings = Bindings::new();
        bindings.insert("code".to_string(), code.to_string());
        bindings.insert("language".to_string(), language.to_string());

        let result = self.execute(CODE_REVIEW_TEMPLATE, &bindings, provider_id).await?;
        Ok(self.envelope(CODE_REVIEW_TEMPLATE, provider_id, result, bindings))
    }

    /// Analyze customer feedback using the feedback analyzer template
    ///
    /// The sentiment binding is only present when the caller supplied one,
    /// leaving the template's `{{customer_sentiment}}` placeholder verbatim
    /// otherwise.
    pub async fn customer_feedback(
        &self,
        feedback_text: &str,
        customer_sentiment: Option<&str>,
        provider: Option<&str>,
    ) -> Result<PromptResponse> {
        let provider_id = provider.unwrap_or(DEFAULT_PROVIDER);
        let mut bindings = Bindings::new();
        bindings.insert("feedback_text".to_string(), feedback_text.to_string());
        if let Some(sentiment) = customer_sentiment {
            bindings.insert("customer_sentiment".to_string(), sentiment.to_string());
        }

        let result = self
            .execute(CUSTOMER_FEEDBACK_TEMPLATE, &bindings, provider_id)
            .await?;
        Ok(self.envelope(CUSTOMER_FEEDBACK_TEMPLATE, provider_id, result, bindings))
    }

    fn envelope(
        &self,
        template_name: &str,
        provider_id: &str,
        result: String,
        bindings: Bindings,
    ) -> PromptResponse {
        let variables = bindings
            .into_iter()
            .map(|(name, value)| (name, preview(&value)))
            .collect();
        PromptResponse {
            prompt_used: template_name.to_string(),
            provider: provider_id.to_string(),
            result,
            variables,
        }
    }
}

/// Truncate a binding value to a bounded preview for response echoes
fn preview(value: &str) -> String {
    if value.chars().count() <= PREVIEW_MAX_CHARS {
        return value.to_string();
    }
    let truncated: String = value.chars().take(PREVIEW_MAX_CHARS).collect();
    format!("{}{}", truncated, PREVIEW_MARKER)
}
