//! Chat session controller
//!
//! Owns everything one chat interaction needs: the active screen, the
//! transcript, the draft input and the request phase. A submission is split
//! into [`ChatSession::begin_submit`] and [`ChatSession::resolve`] so an event
//! loop can run the network call elsewhere and hand the outcome back; the
//! async [`ChatSession::submit`] composes both for callers that can simply
//! await.

use crate::constants::ERROR_PREFIX;
use crate::infrastructure::answer::{AnswerError, AnswerService};
use crate::types::{Message, Role, Screen};
use tracing::{debug, info, warn};

/// Where the session stands with respect to the answer service.
///
/// Only `Awaiting` carries a request, so a second request cannot be in flight
/// while the first one is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing asked since the session started or was reset
    #[default]
    Idle,
    /// A query is in flight; `ticket` identifies it
    Awaiting { ticket: u64 },
    /// The last query produced an answer
    Answered,
    /// The last query failed and the failure was reported as a message
    Errored,
}

/// A query that has been accepted and must be sent to the answer service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub ticket: u64,
    pub query: String,
}

#[derive(Debug, Default)]
pub struct ChatSession {
    screen: Screen,
    messages: Vec<Message>,
    pending_input: String,
    phase: Phase,
    next_ticket: u64,
    scroll_requests: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_awaiting_answer(&self) -> bool {
        matches!(self.phase, Phase::Awaiting { .. })
    }

    /// True once an assistant message (answer or error) landed since the last submit
    pub fn last_answer_completed(&self) -> bool {
        matches!(self.phase, Phase::Answered | Phase::Errored)
    }

    /// Whether the send action is enabled
    pub fn can_send(&self) -> bool {
        !self.pending_input.trim().is_empty() && !self.is_awaiting_answer()
    }

    /// Bumped on every message append; views scroll to the end when it changes
    pub fn scroll_requests(&self) -> u64 {
        self.scroll_requests
    }

    /// Most recent assistant message, if any
    pub fn last_answer(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role() == Role::Assistant)
    }

    pub fn enter_chat(&mut self) {
        if self.screen == Screen::Welcome {
            debug!("Entering chat screen");
        }
        self.screen = Screen::Chat;
    }

    /// Back to the welcome screen with an empty transcript.
    ///
    /// Only meaningful from the chat screen. An in-flight request is
    /// abandoned: its ticket no longer matches, so a late outcome is dropped.
    pub fn reset(&mut self) {
        if self.screen != Screen::Chat {
            return;
        }
        if let Phase::Awaiting { ticket } = self.phase {
            info!(ticket, "Reset abandons in-flight query");
        }
        self.screen = Screen::Welcome;
        self.messages.clear();
        self.pending_input.clear();
        self.phase = Phase::Idle;
        info!("Session reset");
    }

    pub fn update_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Accept the draft as a query.
    ///
    /// Returns `None` without touching any state when the draft is blank or a
    /// query is already in flight.
    pub fn begin_submit(&mut self) -> Option<PendingQuery> {
        if !self.can_send() {
            return None;
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.phase = Phase::Awaiting { ticket };

        let query = self.pending_input.trim().to_string();
        self.pending_input.clear();
        self.push_message(Message::user(query.clone()));

        info!(ticket, query_len = query.len(), "Query submitted");
        Some(PendingQuery { ticket, query })
    }

    /// Record the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` if `ticket` is not the request in flight, in which case
    /// nothing changes.
    pub fn resolve(&mut self, ticket: u64, outcome: Result<String, AnswerError>) -> bool {
        if self.phase != (Phase::Awaiting { ticket }) {
            warn!(ticket, phase = ?self.phase, "Dropping stale answer");
            return false;
        }

        match outcome {
            Ok(answer) => {
                debug!(ticket, answer_len = answer.len(), "Answer received");
                self.push_message(Message::assistant(answer));
                self.phase = Phase::Answered;
            }
            Err(err) => {
                warn!(ticket, error = %err, "Answer request failed");
                self.push_message(Message::assistant(format!("{ERROR_PREFIX}{err}")));
                self.phase = Phase::Errored;
            }
        }
        true
    }

    /// Submit the draft and wait for the answer service.
    ///
    /// Returns `false` when the draft was not accepted.
    pub async fn submit(&mut self, service: &dyn AnswerService) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let outcome = service.ask(&pending.query).await;
        self.resolve(pending.ticket, outcome)
    }

    fn push_message(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll_requests += 1;
    }
}
