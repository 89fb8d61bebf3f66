//! Prompt compiler - turn a document plus bindings into final prompt text
//!
//! Compilation is a pure function: no IO, no side effects, byte-identical
//! output for identical inputs. Sections are emitted in a fixed order, each
//! followed by a blank line; the substituted user input comes last.

use std::collections::BTreeMap;

use crate::template::document::PromptDocument;

/// Variable bindings for one compilation
///
/// Ordered map so substitution order is deterministic.
pub type Bindings = BTreeMap<String, String>;

/// Compile a prompt document with the given variable bindings
///
/// Section order is fixed: persona, instructions, examples, chain of
/// thought, then the user input template with every `{{name}}` placeholder
/// replaced by its bound value. Substitution is literal and single-pass per
/// binding: values are not escaped, substituted text is not re-scanned, and
/// placeholders with no matching binding are left verbatim.
///
/// A document with no sections compiles to an empty string.
pub fn compile(document: &PromptDocument, bindings: &Bindings) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(prompt) = &document.prompt {
        if let Some(persona) = &prompt.persona {
            if let Some(role) = &persona.role {
                parts.push(role.clone());
            }
            if let Some(expertise) = &persona.expertise {
                parts.push(format!("Expertise: {}", expertise));
            }
            if let Some(tone) = &persona.tone {
                parts.push(format!("Tone: {}", tone));
            }
            parts.push(String::new());
        }

        if let Some(instructions) = &prompt.instructions {
            parts.push("Instructions:".to_string());
            for instruction in instructions {
                parts.push(format!("- {}", instruction));
            }
            parts.push(String::new());
        }

        if let Some(examples) = &prompt.few_shot_examples {
            parts.push("Examples:".to_string());
            for example in examples {
                // Missing example fields render as empty strings, not
                // omitted lines
                parts.push(format!("Input: {}", example.input.as_deref().unwrap_or_default()));
                parts.push(format!("Analysis: {}", example.analysis.as_deref().unwrap_or_default()));
                parts.push(format!("Output: {}", example.output.as_deref().unwrap_or_default()));
                parts.push(String::new());
            }
        }

        if let Some(steps) = &prompt.chain_of_thought {
            parts.push("Please follow this process:".to_string());
            for step in steps {
                parts.push(format!("- {}", step));
            }
            parts.push(String::new());
        }
    }

    if let Some(template) = &document.user_input_template {
        let mut user_input = template.clone();
        for (name, value) in bindings {
            user_input = user_input.replace(&format!("{{{{{}}}}}", name), value);
        }
        parts.push(user_input);
    }

    parts.join("\n")
}
