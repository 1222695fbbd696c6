use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::prompt_state::Prompt;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl Prompt {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: String) {
        self.input.insert_str(&text);
        self.refresh_suggestions();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if handle_global_keys(self, key) {
            return;
        }

        if self.completion.is_visible() && handle_completion_keys(self, key) {
            return;
        }

        let line_before = self.input.line().to_string();
        let cursor_before = self.input.cursor_col();

        self.input.textarea.input(key);
        self.input.flatten();

        // Cursor moves change the cursor word too
        if self.input.line() != line_before || self.input.cursor_col() != cursor_before {
            self.refresh_suggestions();
        }
    }
}

/// Keys that work regardless of popup state
fn handle_global_keys(prompt: &mut Prompt, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => {
                prompt.quit();
                return true;
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Enter => {
            prompt.submit();
            true
        }
        // Bring the popup back after Esc
        KeyCode::Tab if !prompt.completion.is_visible() => {
            prompt.refresh_suggestions();
            true
        }
        KeyCode::BackTab if !prompt.completion.is_visible() => true,
        _ => false,
    }
}

fn handle_completion_keys(prompt: &mut Prompt, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab if prompt.completion.is_unique() => {
            prompt.accept_selected();
        }
        KeyCode::Tab | KeyCode::Down => {
            prompt.completion.select_next();
            prompt.mark_dirty();
        }
        KeyCode::BackTab | KeyCode::Up => {
            prompt.completion.select_previous();
            prompt.mark_dirty();
        }
        KeyCode::Right if at_line_end(prompt) => {
            prompt.accept_selected();
        }
        KeyCode::Esc => {
            prompt.completion.hide();
            prompt.mark_dirty();
        }
        _ => return false,
    }
    true
}

fn at_line_end(prompt: &Prompt) -> bool {
    prompt.input.cursor_col() >= prompt.input.line().chars().count()
}

#[cfg(test)]
#[path = "prompt_events_tests.rs"]
mod prompt_events_tests;
