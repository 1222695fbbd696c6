use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme;

const HINTS: &[(&str, &str)] = &[
    ("Tab/\u{2191}\u{2193}", "Select"),
    ("Tab/\u{2192}", "Complete"),
    ("Esc", "Hide"),
    ("Enter", "Submit"),
    ("Ctrl+C", "Quit"),
];

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(build_styled_spans(HINTS)));
    frame.render_widget(help, area);
}
