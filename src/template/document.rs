//! Prompt document data model
//!
//! A prompt document is one `<name>.prompt.json` file: a multi-section
//! description of a prompt (persona, instructions, few-shot examples,
//! chain-of-thought steps, user input template) plus metadata used only
//! for introspection. Every section is optional; unknown JSON fields from
//! authoring tools are ignored.

use serde::{Deserialize, Serialize};

/// A structured prompt template, immutable once loaded
#[derive(Debug, Clone, Deserialize)]
pub struct PromptDocument {
    /// Human-readable title, introspection only
    pub title: Option<String>,

    /// Short description, introspection only
    pub description: Option<String>,

    /// Declared variable names, introspection only
    #[serde(default)]
    pub variables: Vec<String>,

    /// The structured prompt body
    pub prompt: Option<PromptStructure>,

    /// Template for the user's input, with `{{name}}` placeholders
    pub user_input_template: Option<String>,
}

/// The ordered sections of a prompt body
#[derive(Debug, Clone, Deserialize)]
pub struct PromptStructure {
    pub persona: Option<Persona>,
    pub instructions: Option<Vec<String>>,
    pub few_shot_examples: Option<Vec<FewShotExample>>,
    pub chain_of_thought: Option<Vec<String>>,
}

/// Who the model should act as
#[derive(Debug, Clone, Deserialize)]
pub struct Persona {
    pub role: Option<String>,
    pub expertise: Option<String>,
    pub tone: Option<String>,
}

/// One worked example; missing fields render as empty strings
#[derive(Debug, Clone, Deserialize)]
pub struct FewShotExample {
    pub input: Option<String>,
    pub analysis: Option<String>,
    pub output: Option<String>,
}

/// Listing view of a template: metadata only, never prompt internals
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateSummary {
    pub name: String,
    pub title: String,
    pub description: String,
    pub variables: Vec<String>,
}

impl PromptDocument {
    /// Build the listing summary for this document
    ///
    /// Title falls back to the template name when absent, mirroring how
    /// the documents are presented by authoring tools.
    pub fn summary(&self, name: &str) -> TemplateSummary {
        TemplateSummary {
            name: name.to_string(),
            title: self.title.clone().unwrap_or_else(|| name.to_string()),
            description: self.description.clone().unwrap_or_default(),
            variables: self.variables.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "title": "Code Review Assistant",
            "description": "Reviews code for issues",
            "variables": ["code", "language"],
            "prompt": {
                "persona": {
                    "role": "You are a senior engineer.",
                    "expertise": "Rust, distributed systems",
                    "tone": "direct"
                },
                "instructions": ["Be concise", "Use examples"],
                "few_shot_examples": [
                    {"input": "x = 1", "analysis": "fine", "output": "ok"}
                ],
                "chain_of_thought": ["Read the code", "List issues"]
            },
            "user_input_template": "Review: {{code}}"
        }"#;

        let doc: PromptDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Code Review Assistant"));
        assert_eq!(doc.variables, vec!["code", "language"]);

        let prompt = doc.prompt.unwrap();
        let persona = prompt.persona.unwrap();
        assert_eq!(persona.role.as_deref(), Some("You are a senior engineer."));
        assert_eq!(prompt.instructions.unwrap().len(), 2);
        assert_eq!(prompt.few_shot_examples.unwrap().len(), 1);
        assert_eq!(prompt.chain_of_thought.unwrap().len(), 2);
        assert_eq!(doc.user_input_template.as_deref(), Some("Review: {{code}}"));
    }

    #[test]
    fn test_deserialize_empty_document() {
        let doc: PromptDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.title.is_none());
        assert!(doc.prompt.is_none());
        assert!(doc.user_input_template.is_none());
        assert!(doc.variables.is_empty());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "$schema": "https://example.com/prompt.schema.json",
            "title": "T",
            "test_cases": [{"name": "tc1", "inputs": {}}],
            "models": ["gpt-4"],
            "metadata": {"author": "someone"}
        }"#;

        let doc: PromptDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.title.as_deref(), Some("T"));
    }

    #[test]
    fn test_example_missing_fields() {
        let json = r#"{"prompt": {"few_shot_examples": [{"input": "only input"}]}}"#;
        let doc: PromptDocument = serde_json::from_str(json).unwrap();
        let examples = doc.prompt.unwrap().few_shot_examples.unwrap();
        assert_eq!(examples[0].input.as_deref(), Some("only input"));
        assert!(examples[0].analysis.is_none());
        assert!(examples[0].output.is_none());
    }

    #[test]
    fn test_summary_falls_back_to_name() {
        let doc: PromptDocument = serde_json::from_str("{}").unwrap();
        let summary = doc.summary("my-template");
        assert_eq!(summary.name, "my-template");
        assert_eq!(summary.title, "my-template");
        assert_eq!(summary.description, "");
        assert!(summary.variables.is_empty());
    }

    #[test]
    fn test_summary_uses_metadata() {
        let json = r#"{"title": "T", "description": "D", "variables": ["a", "b"]}"#;
        let doc: PromptDocument = serde_json::from_str(json).unwrap();
        let summary = doc.summary("n");
        assert_eq!(summary.title, "T");
        assert_eq!(summary.description, "D");
        assert_eq!(summary.variables, vec!["a", "b"]);
    }
}
