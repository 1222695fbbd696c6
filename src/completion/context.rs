//! Command context extraction
//!
//! Finds the docker command governing the rest of the line. Candidates are
//! tried most-specific first so `service create ` resolves to the compound
//! command rather than to `service`.

/// Compound commands, checked before any single-word command
const COMPOUND_COMMANDS: &[(&str, &str)] = &[
    ("service", "create"),
    ("service", "inspect"),
    ("service", "logs"),
    ("service", "ls"),
    ("service", "ps"),
    ("service", "rollback"),
    ("service", "scale"),
    ("service", "update"),
];

const SIMPLE_COMMANDS: &[&str] = &[
    "attach", "build", "commit", "cp", "create", "events", "exec", "export", "history", "images",
    "import", "info", "inspect", "kill", "load", "login", "logs", "port", "ps", "pull", "push",
    "restart", "rm", "rmi", "run", "save", "search", "service", "stack", "start", "stats", "stop",
    "update", "version",
];

/// The recognized command of an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub command: &'static str,
    pub subcommand: Option<&'static str>,
}

impl CommandContext {
    /// Table key for this context, e.g. `"service create"` or `"run"`
    pub fn key(&self) -> String {
        match self.subcommand {
            Some(sub) => format!("{} {}", self.command, sub),
            None => self.command.to_string(),
        }
    }
}

/// Whether `word` is part of the fixed command vocabulary
pub fn is_known_command(word: &str) -> bool {
    SIMPLE_COMMANDS.contains(&word)
}

/// Extracts the first recognized command from `line`.
///
/// A command only counts once it is followed by whitespace, so a partially
/// typed `pul` yields `None`. Scanning walks token starts left to right and
/// stops at the first position that matches.
pub fn extract_context(line: &str) -> Option<CommandContext> {
    token_starts(line).find_map(|start| match_at(&line[start..]))
}

/// Byte offsets where a token may begin: line start or after whitespace
fn token_starts(line: &str) -> impl Iterator<Item = usize> + '_ {
    let mut prev_is_space = true;
    line.char_indices().filter_map(move |(i, ch)| {
        let starts = prev_is_space && !ch.is_whitespace();
        prev_is_space = ch.is_whitespace();
        starts.then_some(i)
    })
}

fn match_at(rest: &str) -> Option<CommandContext> {
    for &(command, sub) in COMPOUND_COMMANDS {
        if let Some(after) = strip_token(rest, command) {
            let after = after.trim_start();
            if strip_token(after, sub).is_some() {
                return Some(CommandContext {
                    command,
                    subcommand: Some(sub),
                });
            }
        }
    }

    SIMPLE_COMMANDS
        .iter()
        .copied()
        .find(|command| strip_token(rest, command).is_some())
        .map(|command| CommandContext {
            command,
            subcommand: None,
        })
}

/// Strips `token` from the front of `text` when it is followed by whitespace.
/// The returned remainder starts at that whitespace.
fn strip_token<'a>(text: &'a str, token: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(token)?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
