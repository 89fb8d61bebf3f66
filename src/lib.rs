//! Promptr - A prompt template compilation and dispatch service
//!
//! Promptr loads structured prompt templates from disk, compiles them into
//! ordered text prompts with variable substitution, and routes the compiled
//! prompt to one of several LLM providers through a uniform interface.

pub mod error;
pub mod provider;
pub mod server;
pub mod service;
pub mod template;

pub use error::{PromptrError, Result};
