use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::completion::word_before_cursor;
use crate::theme;

/// Single-line editor holding everything typed after `docker `
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: styled_textarea(String::new()),
        }
    }

    pub fn line(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Cursor column in characters
    pub fn cursor_col(&self) -> usize {
        self.textarea.cursor().1
    }

    pub fn word(&self) -> String {
        word_before_cursor(self.line(), self.cursor_col())
    }

    pub fn insert_str(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.textarea.insert_str(flattened);
    }

    /// Replaces the word before the cursor with `text` and leaves the cursor
    /// right after it
    pub fn replace_word(&mut self, text: &str) {
        let cursor = self.cursor_col();
        let word_len = self.word().chars().count();
        let start = cursor - word_len;

        let chars: Vec<char> = self.line().chars().collect();
        let mut line: String = chars[..start].iter().collect();
        line.push_str(text);
        line.extend(&chars[cursor.min(chars.len())..]);

        self.set_line(line, start + text.chars().count());
    }

    /// Folds any extra lines the textarea's own bindings may have created
    /// back into one
    pub fn flatten(&mut self) {
        if self.textarea.lines().len() <= 1 {
            return;
        }
        let line = self.textarea.lines().join(" ");
        let end = line.chars().count();
        self.set_line(line, end);
    }

    fn set_line(&mut self, line: String, cursor: usize) {
        self.textarea = styled_textarea(line);
        let col = u16::try_from(cursor).unwrap_or(u16::MAX);
        self.textarea.move_cursor(CursorMove::Jump(0, col));
    }
}

fn styled_textarea(line: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![line]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::input::CURSOR);
    textarea.set_style(Style::default().fg(theme::input::TEXT));
    textarea
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
