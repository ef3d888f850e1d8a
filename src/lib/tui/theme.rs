//! TUI Theme
//!
//! Dark palette with a violet/pink accent pair for the two chat roles,
//! green for "ready" and amber for "thinking".

use ratatui::style::{Color, Modifier, Style};

/// Primary accent - soft violet blue
pub const ACCENT: Color = Color::Rgb(120, 140, 255);

/// Secondary accent - pink, used for the assistant
pub const ACCENT_ALT: Color = Color::Rgb(255, 130, 200);

/// Waiting indicator - warm amber
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 120);

/// Ready indicator - mint green
pub const SUCCESS: Color = Color::Rgb(130, 255, 180);

pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(110, 110, 125);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Header/title style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Subtitle/secondary text style
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Call-to-action button
pub fn button() -> Style {
    Style::default()
        .fg(Color::Rgb(10, 10, 18))
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

pub fn status_ready() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn status_loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// User message label style
pub fn user_label() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Assistant message label style
pub fn assistant_label() -> Style {
    Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}

// Markdown element styles

pub fn md_heading() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn md_link() -> Style {
    Style::default()
        .fg(ACCENT_ALT)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn md_code() -> Style {
    Style::default().fg(HIGHLIGHT)
}

pub fn md_code_block() -> Style {
    Style::default().fg(Color::Rgb(200, 200, 210))
}

pub fn md_blockquote() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

pub fn md_list_marker() -> Style {
    Style::default().fg(ACCENT)
}
