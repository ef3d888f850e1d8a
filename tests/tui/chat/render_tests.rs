//! Rendering tests on a test backend

use p3r4::answer::AnswerError;
use p3r4::session::ChatSession;
use p3r4::tui::screens::chat::{ChatState, ChatUI};
use p3r4::tui::screens::welcome;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::text::Line;

const BACKEND: &str = "http://127.0.0.1:8000";

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_chat(state: &mut ChatState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
    terminal
        .draw(|frame| ChatUI::render(frame, state, BACKEND))
        .expect("draw");
    screen_text(&terminal)
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn chat_state() -> ChatState {
    let mut session = ChatSession::new();
    session.enter_chat();
    ChatState::with_session(session)
}

#[test]
fn test_welcome_screen_renders() {
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
    terminal.draw(welcome::render).expect("draw");
    let text = screen_text(&terminal);

    assert!(text.contains("Welcome to P3R4"));
    assert!(text.contains("Start chatting"));
}

#[test]
fn test_idle_chat_shows_ready_and_placeholder() {
    let mut state = chat_state();
    let text = render_chat(&mut state);

    assert!(text.contains("Ready"));
    assert!(text.contains(BACKEND));
    assert!(text.contains("Type your question"));
    assert!(!text.contains("Ctrl+W"));
}

#[test]
fn test_awaiting_chat_shows_thinking() {
    let mut state = chat_state();
    state.session.update_input("What is Rust?");
    state.submit().expect("accepted");
    let text = render_chat(&mut state);

    assert!(text.contains("Thinking..."));
    assert!(text.contains("Waiting for response..."));
    assert!(text.contains("What is Rust?"));
}

#[test]
fn test_answer_renders_markdown_and_write_hint() {
    let mut state = chat_state();
    state.session.update_input("docs?");
    let pending = state.submit().expect("accepted");
    state.session.resolve(
        pending.ticket,
        Ok("**Rust** docs live at [the book](https://doc.rust-lang.org/book)".into()),
    );
    let text = render_chat(&mut state);

    assert!(text.contains("Rust docs live at the book (https://doc.rust-lang.org/book)"));
    assert!(!text.contains("**"));
    assert!(text.contains("Ctrl+W"));
    assert!(text.contains("Ready"));
}

#[test]
fn test_render_records_max_scroll() {
    let mut state = chat_state();
    for idx in 0..20 {
        state.session.update_input(format!("question {idx}"));
        let pending = state.submit().expect("accepted");
        state.session.resolve(pending.ticket, Ok(format!("answer {idx}")));
    }
    render_chat(&mut state);

    assert!(state.max_scroll > 0);
}

#[test]
fn test_transcript_labels_and_error_message() {
    let mut state = chat_state();
    state.session.update_input("hello");
    let pending = state.submit().expect("accepted");
    state.session.resolve(
        pending.ticket,
        Err(AnswerError::status(500, Some("Internal Server Error"), "")),
    );

    let lines: Vec<String> = ChatUI::transcript_lines(&state)
        .iter()
        .map(line_text)
        .collect();

    assert_eq!(lines[0], "You");
    assert_eq!(lines[1], "  hello");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "P3R4");
    assert_eq!(
        lines[4],
        "  Error (mock): Backend error: 500 Internal Server Error"
    );
}

#[test]
fn test_transcript_has_thinking_line_while_awaiting() {
    let mut state = chat_state();
    state.session.update_input("hello");
    state.submit().expect("accepted");

    let lines = ChatUI::transcript_lines(&state);
    let last = line_text(lines.last().expect("lines"));
    assert!(last.starts_with("P3R4"));
    assert!(last.ends_with("Thinking..."));
}

fn long_answer() -> String {
    let words = ["a", "of", "wrapping", "interoperability", "x", "characteristically"];
    let mut answer: Vec<&str> = (0..400).map(|idx| words[idx % words.len()]).collect();
    answer.push("THEEND");
    answer.join(" ")
}

#[test]
fn test_pinned_view_shows_end_of_long_wrapped_answer() {
    let mut state = chat_state();
    state.session.update_input("long one");
    let pending = state.submit().expect("accepted");
    state.session.resolve(pending.ticket, Ok(long_answer()));
    state.sync_scroll();

    let mut terminal = Terminal::new(TestBackend::new(40, 20)).expect("terminal");
    terminal
        .draw(|frame| ChatUI::render(frame, &mut state, BACKEND))
        .expect("draw");

    assert!(state.max_scroll > 0);
    assert!(screen_text(&terminal).contains("THEEND"));
}

#[test]
fn test_scrolling_down_reaches_end_of_long_wrapped_answer() {
    let mut state = chat_state();
    state.session.update_input("long one");
    let pending = state.submit().expect("accepted");
    state.session.resolve(pending.ticket, Ok(long_answer()));

    let mut terminal = Terminal::new(TestBackend::new(40, 20)).expect("terminal");
    state.scroll_offset = 0;
    terminal
        .draw(|frame| ChatUI::render(frame, &mut state, BACKEND))
        .expect("draw");
    assert!(!screen_text(&terminal).contains("THEEND"));

    for _ in 0..state.max_scroll {
        state.scroll_down();
    }
    terminal
        .draw(|frame| ChatUI::render(frame, &mut state, BACKEND))
        .expect("draw");
    assert!(screen_text(&terminal).contains("THEEND"));
}
