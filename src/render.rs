//! Placeholder substitution for template content.
//! Handles the `%%SCAFFOLD_<KEY>%%` token grammar shared by override files,
//! built-in templates, and the placed script.

use crate::config::ScaffoldContext;
use regex::{Captures, Regex};

/// Token grammar for placeholders embedded in template text.
const PLACEHOLDER_PATTERN: &str = "%%SCAFFOLD_([A-Za-z0-9_]+)%%";

/// Substitution engine owning the compiled placeholder pattern.
pub struct PlaceholderRenderer {
    pattern: Regex,
}

impl PlaceholderRenderer {
    pub fn new() -> Self {
        // The pattern is a fixed literal and always compiles.
        Self { pattern: Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern") }
    }

    /// Renders template text against the scaffold context.
    ///
    /// Every token is replaced by the context's lower-cased key lookup.
    /// Unresolved keys substitute to the empty string rather than failing
    /// or surviving as literal tokens; the replacement count is returned
    /// for diagnostic logging only.
    pub fn render(&self, template: &str, context: &ScaffoldContext) -> (String, usize) {
        let mut replaced = 0usize;
        let content = self.pattern.replace_all(template, |caps: &Captures| {
            replaced += 1;
            let key = caps[1].to_lowercase();
            context.placeholder_value(&key).unwrap_or_default()
        });
        (content.into_owned(), replaced)
    }
}

impl Default for PlaceholderRenderer {
    fn default() -> Self {
        PlaceholderRenderer::new()
    }
}
