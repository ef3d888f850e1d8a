//! ChatState tests

use p3r4::answer::AnswerError;
use p3r4::session::ChatSession;
use p3r4::tui::screens::chat::ChatState;

fn chat_state() -> ChatState {
    let mut session = ChatSession::new();
    session.enter_chat();
    ChatState::with_session(session)
}

fn answered_state(answer: &str) -> ChatState {
    let mut state = chat_state();
    state.session.update_input("question");
    let pending = state.submit().expect("accepted");
    state.session.resolve(pending.ticket, Ok(answer.to_string()));
    state
}

#[test]
fn test_insert_char() {
    let mut state = chat_state();

    state.insert_char('H');
    state.insert_char('i');

    assert_eq!(state.input(), "Hi");
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_insert_char_mid_draft() {
    let mut state = chat_state();
    state.session.update_input("Hllo");
    state.cursor_pos = 1;

    state.insert_char('e');

    assert_eq!(state.input(), "Hello");
    assert_eq!(state.cursor_pos, 2);
}

#[test]
fn test_multibyte_editing() {
    let mut state = chat_state();
    state.session.update_input("café");
    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 4);

    state.delete_char();
    assert_eq!(state.input(), "caf");

    state.insert_char('é');
    state.insert_char('!');
    assert_eq!(state.input(), "café!");
}

#[test]
fn test_delete_char_at_start() {
    let mut state = chat_state();
    state.session.update_input("Hello");
    state.cursor_pos = 0;

    state.delete_char();

    assert_eq!(state.input(), "Hello");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_delete_char_forward() {
    let mut state = chat_state();
    state.session.update_input("Hello");
    state.cursor_pos = 0;

    state.delete_char_forward();

    assert_eq!(state.input(), "ello");
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_cursor_movement_bounds() {
    let mut state = chat_state();
    state.session.update_input("abc");
    state.cursor_pos = 3;

    state.move_cursor_right();
    assert_eq!(state.cursor_pos, 3);

    state.move_cursor_home();
    state.move_cursor_left();
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_submit_clears_draft_and_pins_to_bottom() {
    let mut state = chat_state();
    state.session.update_input("What is Rust?");
    state.move_cursor_end();
    state.status_message = Some("old notice".into());

    let pending = state.submit().expect("accepted");

    assert_eq!(pending.query, "What is Rust?");
    assert_eq!(state.input(), "");
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.status_message, None);
    assert_eq!(state.scroll_offset, u16::MAX);
    assert!(state.session.is_awaiting_answer());
}

#[test]
fn test_submit_blank_draft_is_ignored() {
    let mut state = chat_state();
    state.session.update_input("   ");

    assert!(state.submit().is_none());
    assert!(state.session.messages().is_empty());
}

#[test]
fn test_sync_scroll_follows_new_messages() {
    let mut state = chat_state();
    state.session.update_input("hello");
    let pending = state.submit().expect("accepted");
    state.scroll_offset = 0;

    assert!(!state.sync_scroll());

    state
        .session
        .resolve(pending.ticket, Err(AnswerError::status(502, Some("Bad Gateway"), "")));
    assert!(state.sync_scroll());
    assert_eq!(state.scroll_offset, u16::MAX);
}

#[test]
fn test_scroll_up_and_down_respect_max() {
    let mut state = chat_state();
    state.max_scroll = 2;
    state.scroll_offset = u16::MAX;

    state.scroll_up();
    assert_eq!(state.scroll_offset, 1);

    state.scroll_down();
    state.scroll_down();
    assert_eq!(state.scroll_offset, 2);

    state.scroll_offset = 0;
    state.scroll_up();
    assert_eq!(state.scroll_offset, 0);
}

#[test]
fn test_tick_loading_only_while_awaiting() {
    let mut state = chat_state();
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);

    state.session.update_input("hello");
    state.submit().expect("accepted");
    for _ in 0..5 {
        state.tick_loading();
    }
    assert_eq!(state.loading_frame, 1);
}

#[test]
fn test_reset_returns_to_welcome() {
    let mut state = answered_state("done");
    state.scroll_offset = 7;

    state.reset();

    assert!(state.session.messages().is_empty());
    assert_eq!(state.scroll_offset, 0);
    assert_eq!(state.status_message.as_deref(), Some("Session reset"));
    assert!(!state.sync_scroll());
}

#[test]
fn test_answer_links_from_latest_answer() {
    let state = answered_state(
        "See [the docs](https://doc.rust-lang.org) and <https://crates.io>.",
    );

    assert_eq!(
        state.answer_links(),
        vec![
            "https://doc.rust-lang.org".to_string(),
            "https://crates.io".to_string()
        ]
    );
}

#[test]
fn test_take_next_link_cycles() {
    let mut state = answered_state("[a](https://a.example) [b](https://b.example)");

    assert_eq!(
        state.take_next_link(),
        Some((1, 2, "https://a.example".to_string()))
    );
    assert_eq!(
        state.take_next_link(),
        Some((2, 2, "https://b.example".to_string()))
    );
    assert_eq!(
        state.take_next_link(),
        Some((1, 2, "https://a.example".to_string()))
    );
}

#[test]
fn test_take_next_link_without_links() {
    let mut state = answered_state("No links here.");
    assert_eq!(state.take_next_link(), None);

    let mut fresh = chat_state();
    assert_eq!(fresh.take_next_link(), None);
}
