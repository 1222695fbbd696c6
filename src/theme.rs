//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Input field styles
pub mod input {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const TITLE: Color = palette::TEXT;
    pub const PREFIX: Style = Style::new()
        .fg(Color::Rgb(198, 120, 221))
        .add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const WARNING: Color = palette::WARNING;

    pub const CURSOR: Style = palette::CURSOR;
}

/// Completion dropdown styles
pub mod completion {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const ITEM_NORMAL_FG: Color = palette::TEXT;
    pub const ITEM_NORMAL_BG: Color = palette::BG_DARK;
    pub const ITEM_SELECTED_FG: Color = palette::BG_DARK;
    pub const ITEM_SELECTED_BG: Color = palette::CYAN;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;

    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const COUNTER: Color = palette::MAGENTA;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}
