use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::prompt_state::Prompt;
use super::{completion_render, help_line_render};
use crate::theme;

pub const PROMPT_PREFIX: &str = ">>> docker ";
const INPUT_TITLE: &str = " docker prompt ";

impl Prompt {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, help_area) = (layout[1], layout[2]);

        render_field(self, frame, input_area);
        help_line_render::render_line(frame, help_area);

        if self.completion.is_visible() {
            completion_render::render_popup(&self.completion, frame, input_area);
        }
    }
}

fn render_field(prompt: &Prompt, frame: &mut Frame, area: Rect) {
    let mut title_spans = vec![Span::styled(
        INPUT_TITLE,
        Style::default().fg(theme::input::TITLE),
    )];
    if let Some(warning) = &prompt.warning {
        title_spans.push(Span::styled(
            format!("\u{26a0} {} ", warning),
            Style::default().fg(theme::input::WARNING),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(theme::input::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prefix_width = PROMPT_PREFIX.chars().count() as u16;
    let [prefix_area, text_area] =
        Layout::horizontal([Constraint::Length(prefix_width), Constraint::Min(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(PROMPT_PREFIX, theme::input::PREFIX)),
        prefix_area,
    );
    frame.render_widget(&prompt.input.textarea, text_area);
}
