//! Template System - Structured prompt documents, loading, and compilation
//!
//! This module provides the data model for file-backed prompt templates,
//! the TemplateStore that loads a directory of them at startup, and the
//! pure compile function that turns a document plus variable bindings into
//! final prompt text.

mod compiler;
mod document;
mod store;

pub use compiler::{Bindings, compile};
pub use document::{FewShotExample, Persona, PromptDocument, PromptStructure, TemplateSummary};
pub use store::{TEMPLATE_SUFFIX, TemplateStore};
