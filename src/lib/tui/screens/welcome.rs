//! Welcome screen

use crate::constants::{ASSISTANT_NAME, WELCOME_TAGLINE};
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame) {
    let area = centered_rect(72, 11, frame.area());

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Welcome to {ASSISTANT_NAME}"),
            theme::title(),
        )),
        Line::default(),
        Line::from(Span::styled(WELCOME_TAGLINE, theme::subtitle())),
        Line::default(),
        Line::from(Span::styled("  Start chatting  ", theme::button())),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", theme::key_hint()),
            Span::styled(": Start │ ", theme::footer()),
            Span::styled("q", theme::key_destructive()),
            Span::styled(": Quit", theme::footer()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(
            format!(" {ASSISTANT_NAME} · Personal Research Agent "),
            theme::title(),
        ));

    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
