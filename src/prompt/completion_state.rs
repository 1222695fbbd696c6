use crate::completion::Suggestion;

#[derive(Debug, Clone)]
pub struct CompletionState {
    suggestions: Vec<Suggestion>,
    selected_index: usize,
    is_visible: bool,
}

impl Default for CompletionState {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionState {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            selected_index: 0,
            is_visible: false,
        }
    }

    pub fn update_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.selected_index = 0;
        self.is_visible = !self.suggestions.is_empty();
    }

    pub fn hide(&mut self) {
        self.is_visible = false;
        self.suggestions.clear();
        self.selected_index = 0;
    }

    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.suggestions.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.suggestions.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.suggestions.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        if self.is_visible {
            self.suggestions.get(self.selected_index)
        } else {
            None
        }
    }

    /// True when exactly one candidate is on offer
    pub fn is_unique(&self) -> bool {
        self.is_visible && self.suggestions.len() == 1
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// First row of a `window`-row view that keeps the selection visible
    pub fn scroll_offset(&self, window: usize) -> usize {
        if window == 0 {
            return 0;
        }
        (self.selected_index + 1).saturating_sub(window)
    }
}

#[cfg(test)]
#[path = "completion_state_tests.rs"]
mod completion_state_tests;
