//! Chat UI rendering components

use super::state::ChatState;
use crate::constants::{ASSISTANT_NAME, WRITE_DESCRIPTION};
use crate::tui::theme;
use crate::tui::widgets::markdown;
use crate::types::Role;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Most composer lines shown before the draft scrolls
const MAX_COMPOSER_LINES: u16 = 5;

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &mut ChatState, backend: &str) {
        let area = frame.area();
        let input_lines = (state.input().lines().count().max(1) as u16
            + u16::from(state.input().ends_with('\n')))
        .min(MAX_COMPOSER_LINES);

        // Layout: Header, Messages, Composer, Footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(input_lines + 2),
                Constraint::Length(1),
            ])
            .split(area);

        Self::render_header(frame, chunks[0], state, backend);
        Self::render_messages(frame, chunks[1], state);
        Self::render_input(frame, chunks[2], state);
        Self::render_footer(frame, chunks[3], state);
    }

    /// Title on the left, status pill on the right
    fn render_header(frame: &mut Frame, area: Rect, state: &ChatState, backend: &str) {
        let status = if state.session.is_awaiting_answer() {
            Span::styled(
                format!(" {} Thinking... ", SPINNER[state.loading_frame % SPINNER.len()]),
                theme::status_loading(),
            )
        } else {
            Span::styled(" ● Ready ", theme::status_ready())
        };

        let mut spans = vec![
            Span::styled(format!(" {ASSISTANT_NAME} "), theme::title()),
            Span::styled("│ Chat ", theme::subtitle()),
            Span::styled("│ ", theme::border()),
            status,
            Span::styled("│ ", theme::border()),
            Span::styled(backend.to_string(), theme::subtitle()),
        ];
        if let Some(message) = &state.status_message {
            spans.push(Span::styled(format!(" │ {message}"), theme::footer()));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    /// Transcript lines: a role label, the markdown body, a blank line
    pub fn transcript_lines(state: &ChatState) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        for message in state.session.messages() {
            let label = match message.role() {
                Role::User => Span::styled("You", theme::user_label()),
                Role::Assistant => Span::styled(ASSISTANT_NAME, theme::assistant_label()),
            };
            lines.push(Line::from(label));

            let rendered = markdown::from_str(message.text());
            for mut line in rendered.lines {
                line.spans.insert(0, Span::raw("  "));
                lines.push(line);
            }
            lines.push(Line::default());
        }

        if state.session.is_awaiting_answer() {
            lines.push(Line::from(vec![
                Span::styled(ASSISTANT_NAME, theme::assistant_label()),
                Span::styled(
                    format!(" {} Thinking...", SPINNER[state.loading_frame % SPINNER.len()]),
                    theme::status_loading(),
                ),
            ]));
        }

        lines
    }

    /// Render messages area
    fn render_messages(frame: &mut Frame, area: Rect, state: &mut ChatState) {
        let inner_height = area.height as usize;
        let inner_width = area.width.saturating_sub(2);

        // Measured without the block so the width is the wrapping width
        let para = Paragraph::new(Self::transcript_lines(state)).wrap(Wrap { trim: false });
        let total_lines = para.line_count(inner_width);
        let max_scroll = total_lines.saturating_sub(inner_height).min(u16::MAX as usize - 1) as u16;
        state.max_scroll = max_scroll;
        let scroll = state.scroll_offset.min(max_scroll);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(theme::border());

        frame.render_widget(para.block(block).scroll((scroll, 0)), area);
    }

    /// Render the composer
    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let can_send = state.session.can_send();
        let awaiting = state.session.is_awaiting_answer();

        let lines: Vec<Line> = if state.input().is_empty() {
            let placeholder = if awaiting {
                "Waiting for response..."
            } else {
                "Type your question…"
            };
            vec![Line::from(vec![
                Span::styled("> ", theme::title()),
                Span::styled(placeholder, theme::subtitle()),
            ])]
        } else {
            // Insert cursor indicator
            let mut chars: Vec<char> = state.input().chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            let display: String = chars.into_iter().collect();
            display
                .split('\n')
                .enumerate()
                .map(|(idx, line)| {
                    let prompt = if idx == 0 { "> " } else { "  " };
                    Line::from(vec![
                        Span::styled(prompt, theme::title()),
                        Span::styled(line.to_string(), theme::text()),
                    ])
                })
                .collect()
        };

        // Keep the cursor line visible in tall drafts
        let cursor_line = state
            .input()
            .chars()
            .take(state.cursor_pos)
            .filter(|c| *c == '\n')
            .count() as u16;
        let visible = area.height.saturating_sub(2);
        let scroll = (cursor_line + 1).saturating_sub(visible);

        let send = if can_send {
            Span::styled(" Send ⏎ ", theme::button())
        } else {
            Span::styled(" Send ", theme::subtitle())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if can_send {
                theme::border_active()
            } else {
                theme::border()
            })
            .title(" Message ")
            .title_top(Line::from(send).right_aligned());

        frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
    }

    /// Key hints, or the Write action once an answer has landed
    fn render_footer(frame: &mut Frame, area: Rect, state: &ChatState) {
        let mut spans = Vec::new();
        if state.session.last_answer_completed() {
            spans.push(Span::styled(" Ctrl+W", theme::key_hint()));
            spans.push(Span::styled(": Write ", theme::text()));
            spans.push(Span::styled(
                format!("({WRITE_DESCRIPTION}) │ "),
                theme::footer(),
            ));
        } else {
            spans.push(Span::raw(" "));
        }
        spans.extend([
            Span::styled("Enter", theme::key_hint()),
            Span::styled(": Send │ ", theme::footer()),
            Span::styled("Shift+Enter", theme::key_hint()),
            Span::styled(": Newline │ ", theme::footer()),
            Span::styled("Ctrl+O", theme::key_hint()),
            Span::styled(": Open link │ ", theme::footer()),
            Span::styled("Ctrl+R", theme::key_destructive()),
            Span::styled(": Reset │ ", theme::footer()),
            Span::styled("Ctrl+Q", theme::key_destructive()),
            Span::styled(": Exit ", theme::footer()),
        ]);

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
