use std::io;

use tokio::runtime::Runtime;

use super::completion_state::CompletionState;
use super::input_state::InputState;
use crate::completion::CompletionResolver;

/// Line that ends the session instead of being submitted
pub const EXIT_COMMAND: &str = "exit";

pub struct Prompt {
    pub input: InputState,
    pub completion: CompletionState,
    pub warning: Option<String>,
    resolver: CompletionResolver,
    executor: Runtime,
    submitted: Option<String>,
    should_quit: bool,
    needs_render: bool,
}

impl Prompt {
    /// Builds a prompt whose completions are resolved on a private
    /// current-thread runtime
    pub fn new(resolver: CompletionResolver) -> io::Result<Self> {
        let executor = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let mut prompt = Self {
            input: InputState::new(),
            completion: CompletionState::new(),
            warning: None,
            resolver,
            executor,
            submitted: None,
            should_quit: false,
            needs_render: true,
        };
        prompt.refresh_suggestions();
        Ok(prompt)
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.warning = Some(message.into());
        self.needs_render = true;
    }

    /// Re-runs the resolver against the current line and cursor word
    pub fn refresh_suggestions(&mut self) {
        let line = self.input.line().to_string();
        let word = self.input.word();
        let suggestions = self
            .executor
            .block_on(self.resolver.resolve(&line, &word));

        #[cfg(debug_assertions)]
        log::debug!(
            "{} suggestions for line {:?} word {:?}",
            suggestions.len(),
            line,
            word
        );

        self.completion.update_suggestions(suggestions);
        self.needs_render = true;
    }

    /// Replaces the cursor word with the selected suggestion
    pub fn accept_selected(&mut self) -> bool {
        let Some(text) = self.completion.selected().map(|s| s.text.clone()) else {
            return false;
        };
        self.input.replace_word(&text);
        self.refresh_suggestions();
        true
    }

    pub fn submit(&mut self) {
        let line = self.input.line().trim().to_string();
        if line.is_empty() {
            return;
        }
        if line != EXIT_COMMAND {
            self.submitted = Some(line);
        }
        self.quit();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Line confirmed with Enter, if the session ended that way
    pub fn submitted(&self) -> Option<&str> {
        self.submitted.as_deref()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }
}

#[cfg(test)]
#[path = "prompt_state_tests.rs"]
mod prompt_state_tests;
