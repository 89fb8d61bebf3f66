//! HTTP surface over the PromptService
//!
//! Thin axum layer: routing and body shapes only. All failures from the
//! façade map to HTTP 500 with a JSON error body carrying the normalized
//! message, never internal detail.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::PromptrError;
use crate::service::{PromptResponse, PromptService};
use crate::template::TemplateSummary;

#[derive(Deserialize)]
pub struct CodeReviewRequest {
    pub code: String,
    pub language: String,
    pub provider: Option<String>,
}

#[derive(Deserialize)]
pub struct CustomerFeedbackRequest {
    pub feedback_text: String,
    pub customer_sentiment: Option<String>,
    pub provider: Option<String>,
}

#[derive(Serialize)]
struct RootResponse {
    message: String,
    available_prompts: Vec<String>,
    endpoints: Vec<&'static str>,
}

#[derive(Serialize)]
struct PromptListResponse {
    prompts: Vec<TemplateSummary>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    prompts_loaded: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn internal_error(err: PromptrError) -> HandlerError {
    log::error!("Request failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Build the router over a shared service
pub fn router(service: Arc<PromptService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/prompts", get(list_prompts))
        .route("/health", get(health))
        .route("/code-review", post(code_review))
        .route("/customer-feedback", post(customer_feedback))
        .with_state(service)
}

/// Bind and serve until ctrl-c
pub async fn serve(service: Arc<PromptService>, bind: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    log::info!("Listening on {}", bind);
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        log::error!("Failed to install ctrl-c handler");
        return;
    }
    log::info!("Ctrl-C received, shutting down gracefully");
}

async fn root(State(service): State<Arc<PromptService>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Promptr - prompt template compilation service".to_string(),
        available_prompts: service.store().names(),
        endpoints: vec!["/prompts", "/health", "/code-review", "/customer-feedback"],
    })
}

async fn list_prompts(State(service): State<Arc<PromptService>>) -> Json<PromptListResponse> {
    Json(PromptListResponse {
        prompts: service.store().list(),
    })
}

async fn health(State(service): State<Arc<PromptService>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        prompts_loaded: service.store().len(),
    })
}

async fn code_review(
    State(service): State<Arc<PromptService>>,
    Json(request): Json<CodeReviewRequest>,
) -> Result<Json<PromptResponse>, HandlerError> {
    let response = service
        .code_review(&request.code, &request.language, request.provider.as_deref())
        .await
        .map_err(internal_error)?;
    Ok(Json(response))
}

async fn customer_feedback(
    State(service): State<Arc<PromptService>>,
    Json(request): Json<CustomerFeedbackRequest>,
) -> Result<Json<PromptResponse>, HandlerError> {
    let response = service
        .customer_feedback(
            &request.feedback_text,
            request.customer_sentiment.as_deref(),
            request.provider.as_deref(),
        )
        .await
        .map_err(internal_error)?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockProvider, ProviderGateway};
    use crate::template::TemplateStore;

    fn test_service() -> Arc<PromptService> {
        let mut gateway = ProviderGateway::new();
        gateway.register(Arc::new(MockProvider::with_name("openai")));
        Arc::new(PromptService::new(TemplateStore::default(), gateway))
    }

    #[test]
    fn test_router_builds() {
        let _router = router(test_service());
    }

    #[test]
    fn test_request_body_shapes() {
        let body: CodeReviewRequest =
            serde_json::from_str(r#"{"code": "x", "language": "python"}"#).unwrap();
        assert!(body.provider.is_none());

        let body: CustomerFeedbackRequest = serde_json::from_str(
            r#"{"feedback_text": "slow", "customer_sentiment": "negative", "provider": "google"}"#,
        )
        .unwrap();
        assert_eq!(body.provider.as_deref(), Some("google"));
    }

    #[test]
    fn test_internal_error_body() {
        let (status, Json(body)) =
            internal_error(PromptrError::TemplateNotFound("x".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Template not found: x");
    }
}
