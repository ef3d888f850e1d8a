//! Chat view state
//!
//! Wraps the [`ChatSession`] with what only the terminal view needs: the
//! cursor inside the draft, scrolling, the spinner frame and a one-line
//! status notice.

use crate::application::ChatSession;
use crate::tui::widgets::markdown;

pub struct ChatState {
    pub session: ChatSession,
    /// Cursor position in the draft, counted in chars
    pub cursor_pos: usize,
    /// Scroll offset for messages; `u16::MAX` pins the view to the end
    pub scroll_offset: u16,
    /// Largest useful scroll offset, measured on the last render
    pub max_scroll: u16,
    /// Loading animation frame
    pub loading_frame: usize,
    pub status_message: Option<String>,
    /// Which link of the latest answer Ctrl+O opens next
    pub next_link: usize,
    seen_scroll_requests: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self::with_session(ChatSession::new())
    }

    pub fn with_session(session: ChatSession) -> Self {
        let seen_scroll_requests = session.scroll_requests();
        Self {
            session,
            cursor_pos: 0,
            scroll_offset: 0,
            max_scroll: 0,
            loading_frame: 0,
            status_message: None,
            next_link: 0,
            seen_scroll_requests,
        }
    }

    pub fn input(&self) -> &str {
        self.session.pending_input()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input()
            .char_indices()
            .nth(char_pos)
            .map_or(self.input().len(), |(idx, _)| idx)
    }

    fn input_len(&self) -> usize {
        self.input().chars().count()
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let mut input = self.input().to_string();
        let idx = self.byte_index(self.cursor_pos);
        input.insert(idx, c);
        self.session.update_input(input);
        self.cursor_pos += 1;
    }

    /// Insert pasted text at the cursor, with line endings normalized
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut input = self.input().to_string();
        let idx = self.byte_index(self.cursor_pos);
        input.insert_str(idx, &text);
        self.session.update_input(input);
        self.cursor_pos += text.chars().count();
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let mut input = self.input().to_string();
        let idx = self.byte_index(self.cursor_pos - 1);
        input.remove(idx);
        self.session.update_input(input);
        self.cursor_pos -= 1;
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos >= self.input_len() {
            return;
        }
        let mut input = self.input().to_string();
        let idx = self.byte_index(self.cursor_pos);
        input.remove(idx);
        self.session.update_input(input);
    }

    pub fn clear_input(&mut self) {
        self.session.update_input(String::new());
        self.cursor_pos = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_len();
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        if self.scroll_offset > self.max_scroll {
            self.scroll_offset = self.max_scroll;
        }
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll messages down
    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Resolved against the content height during render
        self.scroll_offset = u16::MAX;
    }

    /// Follow the session's scroll requests; true if the view jumped
    pub fn sync_scroll(&mut self) -> bool {
        let requests = self.session.scroll_requests();
        if requests == self.seen_scroll_requests {
            return false;
        }
        self.seen_scroll_requests = requests;
        self.scroll_to_bottom();
        true
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.session.is_awaiting_answer() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Send the draft; the caller dispatches the returned query
    pub fn submit(&mut self) -> Option<crate::application::PendingQuery> {
        let pending = self.session.begin_submit()?;
        self.cursor_pos = 0;
        self.status_message = None;
        self.next_link = 0;
        self.sync_scroll();
        Some(pending)
    }

    /// Reset session and view
    pub fn reset(&mut self) {
        self.session.reset();
        self.cursor_pos = 0;
        self.scroll_offset = 0;
        self.loading_frame = 0;
        self.next_link = 0;
        self.status_message = Some("Session reset".into());
        self.seen_scroll_requests = self.session.scroll_requests();
    }

    /// Link targets of the latest assistant answer
    pub fn answer_links(&self) -> Vec<String> {
        self.session
            .last_answer()
            .map(|message| markdown::extract_links(message.text()))
            .unwrap_or_default()
    }

    /// Pick the next link of the latest answer, cycling through them
    pub fn take_next_link(&mut self) -> Option<(usize, usize, String)> {
        let links = self.answer_links();
        if links.is_empty() {
            return None;
        }
        let index = self.next_link % links.len();
        self.next_link = index + 1;
        Some((index + 1, links.len(), links[index].clone()))
    }
}
