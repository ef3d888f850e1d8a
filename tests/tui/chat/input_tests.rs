//! Key handling tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use p3r4::session::ChatSession;
use p3r4::tui::screens::chat::{ChatState, InputAction, handle_input};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn chat_state() -> ChatState {
    let mut session = ChatSession::new();
    session.enter_chat();
    ChatState::with_session(session)
}

fn type_text(state: &mut ChatState, text: &str) {
    for c in text.chars() {
        handle_input(state, key(KeyCode::Char(c)));
    }
}

#[test]
fn test_welcome_enter_starts_chat() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::EnterChat);
    assert_eq!(
        handle_input(&mut state, key(KeyCode::Char(' '))),
        InputAction::EnterChat
    );
}

#[test]
fn test_welcome_quit_keys() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, key(KeyCode::Esc)), InputAction::Exit);
    assert_eq!(handle_input(&mut state, key(KeyCode::Char('q'))), InputAction::Exit);
    assert_eq!(handle_input(&mut state, ctrl('c')), InputAction::Exit);
}

#[test]
fn test_welcome_ignores_typing() {
    let mut state = ChatState::new();
    assert_eq!(handle_input(&mut state, key(KeyCode::Char('x'))), InputAction::None);
    assert_eq!(state.input(), "");
}

#[test]
fn test_typing_updates_draft() {
    let mut state = chat_state();
    type_text(&mut state, "hello");

    assert_eq!(state.input(), "hello");
    assert_eq!(state.session.pending_input(), "hello");
    assert_eq!(state.cursor_pos, 5);
}

#[test]
fn test_enter_submits() {
    let mut state = chat_state();
    type_text(&mut state, "hi");
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn test_shift_enter_inserts_newline() {
    let mut state = chat_state();
    type_text(&mut state, "a");
    let shift_enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));

    assert_eq!(handle_input(&mut state, shift_enter), InputAction::None);
    type_text(&mut state, "b");
    assert_eq!(state.input(), "a\nb");
}

#[test]
fn test_backspace_and_escape() {
    let mut state = chat_state();
    type_text(&mut state, "abc");

    handle_input(&mut state, key(KeyCode::Backspace));
    assert_eq!(state.input(), "ab");

    handle_input(&mut state, key(KeyCode::Esc));
    assert_eq!(state.input(), "");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_ctrl_c_clears_draft_without_exit() {
    let mut state = chat_state();
    type_text(&mut state, "draft");

    assert_eq!(handle_input(&mut state, ctrl('c')), InputAction::None);
    assert_eq!(state.input(), "");
}

#[test]
fn test_control_chords_do_not_type() {
    let mut state = chat_state();
    assert_eq!(handle_input(&mut state, ctrl('x')), InputAction::None);
    assert_eq!(state.input(), "");
}

#[test]
fn test_chat_shortcuts() {
    let mut state = chat_state();
    assert_eq!(handle_input(&mut state, ctrl('q')), InputAction::Exit);
    assert_eq!(handle_input(&mut state, ctrl('r')), InputAction::Reset);
    assert_eq!(handle_input(&mut state, ctrl('o')), InputAction::OpenLink);
    assert_eq!(handle_input(&mut state, ctrl('u')), InputAction::ScrollTop);
    assert_eq!(handle_input(&mut state, ctrl('d')), InputAction::ScrollBottom);
    assert_eq!(handle_input(&mut state, key(KeyCode::Up)), InputAction::ScrollUp);
    assert_eq!(handle_input(&mut state, key(KeyCode::PageDown)), InputAction::ScrollDown);
}

#[test]
fn test_write_only_after_answer() {
    let mut state = chat_state();
    assert_eq!(handle_input(&mut state, ctrl('w')), InputAction::None);

    state.session.update_input("question");
    let pending = state.submit().expect("accepted");
    assert_eq!(handle_input(&mut state, ctrl('w')), InputAction::None);

    state.session.resolve(pending.ticket, Ok("answer".into()));
    assert_eq!(handle_input(&mut state, ctrl('w')), InputAction::Write);
}

#[test]
fn test_key_release_is_ignored() {
    let mut state = chat_state();
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;

    assert_eq!(handle_input(&mut state, Event::Key(release)), InputAction::None);
    assert_eq!(state.input(), "");
}

#[test]
fn test_paste_keeps_newlines_in_draft() {
    let mut state = chat_state();
    type_text(&mut state, "> ");

    let action = handle_input(&mut state, Event::Paste("line one\r\nline two\nline three".into()));

    assert_eq!(action, InputAction::None);
    assert_eq!(state.input(), "> line one\nline two\nline three");
    assert_eq!(state.cursor_pos, state.input().chars().count());
    assert!(state.session.messages().is_empty());
}

#[test]
fn test_paste_at_cursor() {
    let mut state = chat_state();
    type_text(&mut state, "ad");
    handle_input(&mut state, key(KeyCode::Left));

    handle_input(&mut state, Event::Paste("bc".into()));

    assert_eq!(state.input(), "abcd");
    assert_eq!(state.cursor_pos, 3);
}

#[test]
fn test_paste_ignored_on_welcome() {
    let mut state = ChatState::new();
    assert_eq!(
        handle_input(&mut state, Event::Paste("hello".into())),
        InputAction::None
    );
    assert_eq!(state.input(), "");
}
