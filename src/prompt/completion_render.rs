use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::completion_state::CompletionState;
use crate::theme;
use crate::widgets::popup;

const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 90;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const COLUMN_SPACING: usize = 2;

pub fn render_popup(state: &CompletionState, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    let suggestions = state.suggestions();
    if suggestions.is_empty() {
        return None;
    }

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let max_text_width = suggestions
        .iter()
        .map(|s| s.text.chars().count())
        .max()
        .unwrap_or(0);
    let max_desc_width = suggestions
        .iter()
        .map(|s| s.description.chars().count())
        .max()
        .unwrap_or(0);
    let content_width =
        (max_text_width + COLUMN_SPACING + max_desc_width + COLUMN_SPACING).min(MAX_POPUP_WIDTH);
    let popup_width = (content_width as u16) + POPUP_PADDING;

    let popup_area =
        popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let offset = state.scroll_offset(visible_count);
    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_count)
        .map(|(i, suggestion)| {
            let padding =
                " ".repeat(max_text_width.saturating_sub(suggestion.text.chars().count()));

            let line = if i == state.selected_index() {
                let style = Style::default()
                    .fg(theme::completion::ITEM_SELECTED_FG)
                    .bg(theme::completion::ITEM_SELECTED_BG);
                Line::from(vec![
                    Span::styled(
                        format!("\u{25ba} {}{}", suggestion.text, padding),
                        style.add_modifier(theme::completion::ITEM_SELECTED_MODIFIER),
                    ),
                    Span::styled(format!("  {}", suggestion.description), style),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{}", suggestion.text, padding),
                        Style::default()
                            .fg(theme::completion::ITEM_NORMAL_FG)
                            .bg(theme::completion::ITEM_NORMAL_BG),
                    ),
                    Span::styled(
                        format!("  {}", suggestion.description),
                        Style::default()
                            .fg(theme::completion::DESCRIPTION)
                            .bg(theme::completion::ITEM_NORMAL_BG),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let counter = format!(" {}/{} ", state.selected_index() + 1, suggestions.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .title_bottom(
                Line::from(Span::styled(
                    counter,
                    Style::default().fg(theme::completion::COUNTER),
                ))
                .right_aligned(),
            )
            .border_style(Style::default().fg(theme::completion::BORDER))
            .style(Style::default().bg(theme::completion::BACKGROUND)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}
