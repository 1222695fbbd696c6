//! Static suggestion tables
//!
//! Flag tables for each command and the root-command list. The raw data
//! lives in `tables.rs`; this module assembles it once into an immutable
//! lookup map so the resolver never needs per-command conditionals.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::suggestion::Suggestion;

mod tables;

/// One row of a static suggestion table
#[derive(Debug, Clone, Copy)]
pub struct FlagEntry {
    /// Text inserted on completion (e.g., "--detach")
    pub text: &'static str,
    /// Description shown next to the text
    pub description: &'static str,
}

impl FlagEntry {
    pub const fn new(text: &'static str, description: &'static str) -> Self {
        Self { text, description }
    }

    fn to_suggestion(self) -> Suggestion {
        Suggestion::new(self.text, self.description)
    }
}

static FLAG_TABLE: LazyLock<HashMap<&'static str, Vec<Suggestion>>> = LazyLock::new(|| {
    tables::COMMAND_FLAGS
        .iter()
        .map(|(command, entries)| {
            let suggestions = entries.iter().map(|e| e.to_suggestion()).collect();
            (*command, suggestions)
        })
        .collect()
});

static ROOT_SUGGESTIONS: LazyLock<Vec<Suggestion>> = LazyLock::new(|| {
    tables::ROOT_COMMANDS
        .iter()
        .map(|e| e.to_suggestion())
        .collect()
});

/// Flag suggestions for an exact command key such as `"run"` or
/// `"service create"`. `None` means the command has no table.
pub fn flags_for(command: &str) -> Option<&'static [Suggestion]> {
    FLAG_TABLE.get(command).map(Vec::as_slice)
}

/// The full list of top-level commands
pub fn root_commands() -> &'static [Suggestion] {
    ROOT_SUGGESTIONS.as_slice()
}

#[cfg(test)]
#[path = "flag_table_tests.rs"]
mod flag_table_tests;
