//! Template Store - load and index prompt documents from a directory
//!
//! The store is built once at startup by scanning a directory for
//! `*.prompt.json` files. Any parse failure aborts the whole load, so the
//! service never starts with a partially valid template set. After load the
//! store is immutable and safe to share across requests without locking.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{PromptrError, Result};
use crate::template::document::{PromptDocument, TemplateSummary};

/// File suffix marking a template file; the template name is the filename
/// with this suffix stripped
pub const TEMPLATE_SUFFIX: &str = ".prompt.json";

/// In-memory mapping from template name to parsed document
#[derive(Debug, Default)]
pub struct TemplateStore {
    templates: HashMap<String, PromptDocument>,
}

impl TemplateStore {
    /// Load all prompt templates from a directory
    ///
    /// # Arguments
    /// * `dir` - Directory containing `<name>.prompt.json` files
    ///
    /// # Errors
    /// `DirectoryLoad` if the directory cannot be read, `TemplateParse`
    /// naming the offending file if any document is malformed. Both are
    /// startup-fatal by contract.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .map_err(|e| PromptrError::DirectoryLoad(format!("{}: {}", dir.display(), e)))?;

        let mut store = Self::default();
        for entry in entries {
            let entry =
                entry.map_err(|e| PromptrError::DirectoryLoad(format!("{}: {}", dir.display(), e)))?;
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(name) = file_name.strip_suffix(TEMPLATE_SUFFIX) else {
                continue;
            };

            let content = std::fs::read_to_string(&path).map_err(|e| {
                PromptrError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to read template '{}' from {:?}: {}", name, path, e),
                ))
            })?;
            let document: PromptDocument =
                serde_json::from_str(&content).map_err(|e| PromptrError::TemplateParse {
                    file: file_name.to_string(),
                    message: e.to_string(),
                })?;

            log::debug!("Loaded template '{}' from {}", name, path.display());
            store.insert(name, document);
        }

        log::info!("Loaded {} templates from {}", store.len(), dir.display());
        Ok(store)
    }

    /// Insert a document under a name; an existing entry is replaced
    ///
    /// Duplicate names cannot arise from a single directory scan, but the
    /// replacement policy is last-write-wins and tests assert it.
    pub fn insert(&mut self, name: impl Into<String>, document: PromptDocument) {
        self.templates.insert(name.into(), document);
    }

    /// Look up a template by name
    pub fn get(&self, name: &str) -> Result<&PromptDocument> {
        self.templates
            .get(name)
            .ok_or_else(|| PromptrError::TemplateNotFound(name.to_string()))
    }

    /// List summaries of all loaded templates, sorted by name
    ///
    /// Summaries expose title/description/variables only, never the prompt
    /// sections themselves.
    pub fn list(&self) -> Vec<TemplateSummary> {
        let mut summaries: Vec<TemplateSummary> = self
            .templates
            .iter()
            .map(|(name, doc)| doc.summary(name))
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    /// All loaded template names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.templates.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of loaded templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the store holds no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_template(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(format!("{}{}", name, TEMPLATE_SUFFIX));
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_empty_directory() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::load(dir.path()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_load_templates() {
        let dir = TempDir::new().unwrap();
        write_template(&dir, "code-review-assistant", r#"{"title": "Code Review"}"#);
        write_template(&dir, "customer-feedback-analyzer", r#"{"title": "Feedback"}"#);

        let store = TemplateStore::load(dir.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.names(),
            vec!["code-review-assistant", "customer-feedback-analyzer"]
        );
    }

    #[test]
    fn test_load_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let result = TemplateStore::load(&missing);
        assert!(matches!(result, Err(PromptrError::DirectoryLoad(_))));
    }

    #[test]
    fn test_load_malformed_template_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        write_template(&dir, "good", r#"{"title": "ok"}"#);
        write_template(&dir, "bad", "{not json");

        let result = TemplateStore::load(dir.path());
        match result {
            Err(PromptrError::TemplateParse { file, .. }) => {
                assert_eq!(file, format!("bad{}", TEMPLATE_SUFFIX));
            }
            other => panic!("expected TemplateParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_ignores_non_template_files() {
        let dir = TempDir::new().unwrap();
        write_template(&dir, "real", "{}");
        fs::write(dir.path().join("notes.txt"), "not a template").unwrap();
        fs::write(dir.path().join("plain.json"), "{}").unwrap();

        let store = TemplateStore::load(dir.path()).unwrap();
        assert_eq!(store.names(), vec!["real"]);
    }

    #[test]
    fn test_get_found() {
        let dir = TempDir::new().unwrap();
        write_template(&dir, "t", r#"{"title": "Found"}"#);
        let store = TemplateStore::load(dir.path()).unwrap();

        let doc = store.get("t").unwrap();
        assert_eq!(doc.title.as_deref(), Some("Found"));
    }

    #[test]
    fn test_get_not_found() {
        let store = TemplateStore::default();
        let result = store.get("missing");
        assert!(matches!(result, Err(PromptrError::TemplateNotFound(name)) if name == "missing"));
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut store = TemplateStore::default();
        store.insert("dup", serde_json::from_str(r#"{"title": "first"}"#).unwrap());
        store.insert("dup", serde_json::from_str(r#"{"title": "second"}"#).unwrap());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("dup").unwrap().title.as_deref(), Some("second"));
    }

    #[test]
    fn test_list_exposes_metadata_only() {
        let dir = TempDir::new().unwrap();
        write_template(
            &dir,
            "t",
            r#"{
                "title": "T",
                "description": "D",
                "variables": ["x"],
                "prompt": {"instructions": ["secret internal detail"]},
                "user_input_template": "{{x}}"
            }"#,
        );
        let store = TemplateStore::load(dir.path()).unwrap();

        let listing = store.list();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].title, "T");
        assert_eq!(listing[0].description, "D");
        assert_eq!(listing[0].variables, vec!["x"]);

        // The serialized listing must not leak prompt internals
        let json = serde_json::to_string(&listing).unwrap();
        assert!(!json.contains("instructions"));
        assert!(!json.contains("secret internal detail"));
        assert!(!json.contains("user_input_template"));
    }

    #[test]
    fn test_list_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        write_template(&dir, "zeta", "{}");
        write_template(&dir, "alpha", "{}");
        write_template(&dir, "mid", "{}");

        let store = TemplateStore::load(dir.path()).unwrap();
        let names: Vec<String> = store.list().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
