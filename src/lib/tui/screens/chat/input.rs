//! Key handling for the welcome and chat screens

use super::state::ChatState;
use crate::types::Screen;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Exit the application
    Exit,
    /// Leave the welcome screen
    EnterChat,
    /// Submit the current input
    Submit,
    /// Back to the welcome screen with a fresh session
    Reset,
    /// Placeholder for document export
    Write,
    /// Open the next link of the latest answer externally
    OpenLink,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle a terminal event and update the draft in place
pub fn handle_input(state: &mut ChatState, event: Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match state.session.screen() {
            Screen::Welcome => handle_welcome_key(key),
            Screen::Chat => handle_chat_key(state, key),
        },
        // Pasted newlines stay in the draft instead of submitting it
        Event::Paste(text) if state.session.screen() == Screen::Chat => {
            state.insert_str(&text);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

fn handle_welcome_key(key: KeyEvent) -> InputAction {
    if is_ctrl(&key, 'q') || is_ctrl(&key, 'c') {
        return InputAction::Exit;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::EnterChat,
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Exit,
        _ => InputAction::None,
    }
}

fn handle_chat_key(state: &mut ChatState, key: KeyEvent) -> InputAction {
    if is_ctrl(&key, 'q') {
        return InputAction::Exit;
    }
    if is_ctrl(&key, 'c') {
        state.clear_input();
        return InputAction::None;
    }
    if is_ctrl(&key, 'r') {
        return InputAction::Reset;
    }
    if is_ctrl(&key, 'w') {
        // Only offered once an answer has landed
        return if state.session.last_answer_completed() {
            InputAction::Write
        } else {
            InputAction::None
        };
    }
    if is_ctrl(&key, 'o') {
        return InputAction::OpenLink;
    }
    if is_ctrl(&key, 'u') {
        return InputAction::ScrollTop;
    }
    if is_ctrl(&key, 'd') {
        return InputAction::ScrollBottom;
    }

    match key.code {
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            state.insert_char('\n');
            InputAction::None
        }
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Esc => {
            state.clear_input();
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.insert_char(c);
            InputAction::None
        }
        KeyCode::Tab => {
            state.insert_char(' ');
            state.insert_char(' ');
            InputAction::None
        }
        _ => InputAction::None,
    }
}
