//! Provider Layer - uniform text-completion capability over multiple LLM APIs
//!
//! This module provides:
//! - The Provider trait ("accepts a prompt string, returns generated text")
//! - Clients for the OpenAI, Anthropic, and Google Gemini APIs
//! - A mock provider for tests and credential-free local runs
//! - The ProviderGateway registry dispatching by provider identifier

pub mod anthropic;
pub mod client;
pub mod gateway;
pub mod gemini;
pub mod mock;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use client::{Provider, ProviderSettings};
pub use gateway::ProviderGateway;
pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use openai::OpenAiProvider;
