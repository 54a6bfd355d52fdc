//! Layered prompt builder.
//!
//! Prompts are assembled from a stack of plain-text fragments appended in
//! order and joined with blank lines. Variable substitution uses `{{key}}`
//! syntax and is applied once at [`build()`](PromptBuilder::build) time,
//! after all layers are joined.

use std::collections::HashMap;

const SEPARATOR: &str = "\n\n";

/// Fluent builder that assembles a layered prompt from text fragments.
pub struct PromptBuilder {
    parts: Vec<String>,
    vars: HashMap<String, String>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self { parts: Vec::new(), vars: HashMap::new() }
    }

    /// Append a text fragment. Empty fragments are skipped.
    pub fn append(mut self, text: impl Into<String>) -> Self {
        let s = text.into();
        let trimmed = s.trim().to_string();
        if !trimmed.is_empty() {
            self.parts.push(trimmed);
        }
        self
    }

    /// Register a `{{key}}` → `value` substitution applied at build time.
    pub fn var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Assemble all layers, join with blank lines, and apply substitution.
    pub fn build(self) -> String {
        let mut prompt = self.parts.join(SEPARATOR);
        for (k, v) in &self.vars {
            let placeholder = format!("{{{{{}}}}}", k);
            prompt = prompt.replace(&placeholder, v);
        }
        prompt
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_layers_in_order() {
        let result = PromptBuilder::new().append("first").append("second").build();
        assert_eq!(result, "first\n\nsecond");
    }

    #[test]
    fn skips_empty_fragments() {
        let result = PromptBuilder::new().append("  ").append("body").build();
        assert_eq!(result, "body");
    }

    #[test]
    fn substitutes_variable() {
        let result = PromptBuilder::new()
            .append("Input: {{input}}")
            .var("input", "explain calculus")
            .build();
        assert_eq!(result, "Input: explain calculus");
        assert!(!result.contains("{{input}}"));
    }

    #[test]
    fn substitution_runs_after_joining() {
        let result = PromptBuilder::new()
            .append("a: {{x}}")
            .append("b: {{x}}")
            .var("x", "v")
            .build();
        assert_eq!(result, "a: v\n\nb: v");
    }
}
