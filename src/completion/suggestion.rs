use std::fmt;

/// A single completion candidate shown under the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub description: String,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.text, self.description)
    }
}

/// Keeps the suggestions whose text starts with `prefix`, ignoring case.
///
/// An empty prefix keeps everything. Order is preserved.
pub fn filter_has_prefix(suggestions: &[Suggestion], prefix: &str) -> Vec<Suggestion> {
    if prefix.is_empty() {
        return suggestions.to_vec();
    }

    let prefix_lower = prefix.to_lowercase();
    suggestions
        .iter()
        .filter(|s| s.text.to_lowercase().starts_with(&prefix_lower))
        .cloned()
        .collect()
}

/// Returns the word the cursor sits at the end of.
///
/// `cursor` is a character (not byte) offset into `text`. The word is
/// everything after the last space before the cursor, so a trailing space
/// yields an empty word.
pub fn word_before_cursor(text: &str, cursor: usize) -> String {
    let before: String = text.chars().take(cursor).collect();
    match before.rfind(' ') {
        Some(pos) => before[pos + 1..].to_string(),
        None => before,
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
