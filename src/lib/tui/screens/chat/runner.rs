//! Chat runner - main event loop coordinator
//!
//! The loop is the only owner of [`ChatState`]. Queries run on spawned tasks
//! and their outcomes come back over a channel that is drained before every
//! draw, so all state changes happen here.

use super::input::{InputAction, handle_input};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::application::PendingQuery;
use crate::constants::WRITE_STUB_NOTICE;
use crate::infrastructure::answer::{AnswerError, AnswerService};
use crate::tui::screens::welcome;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crate::types::Screen;
use crossterm::event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Result of chat session
pub enum ChatResult {
    Exit,
}

/// Events from async response handling
enum ResponseEvent {
    Resolved {
        ticket: u64,
        outcome: Result<String, AnswerError>,
    },
}

/// Run the TUI, starting on the welcome screen
pub async fn run_chat(
    service: Arc<dyn AnswerService>,
    backend: String,
) -> Result<ChatResult, Box<dyn Error>> {
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new();

    let result = run_chat_loop(&mut terminal, &mut state, service, &backend).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop(
    terminal: &mut Tui,
    state: &mut ChatState,
    service: Arc<dyn AnswerService>,
    backend: &str,
) -> Result<ChatResult, Box<dyn Error>> {
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(10);

    loop {
        drain_responses(state, &mut response_rx);

        terminal.draw(|frame| match state.session.screen() {
            Screen::Welcome => welcome::render(frame),
            Screen::Chat => ChatUI::render(frame, state, backend),
        })?;

        let timeout = if state.session.is_awaiting_answer() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if !event::poll(timeout)? {
            state.tick_loading();
            continue;
        }

        let event = event::read()?;
        match handle_input(state, event) {
            InputAction::Exit => {
                info!("Exiting chat");
                return Ok(ChatResult::Exit);
            }

            InputAction::EnterChat => {
                state.session.enter_chat();
                state.status_message = None;
            }

            InputAction::Submit => {
                if let Some(pending) = state.submit() {
                    spawn_query(service.clone(), pending, response_tx.clone());
                }
            }

            InputAction::Reset => {
                state.reset();
            }

            InputAction::Write => {
                info!("Write requested; document export is not available");
                state.status_message = Some(WRITE_STUB_NOTICE.to_string());
            }

            InputAction::OpenLink => open_next_link(state),

            InputAction::ScrollUp => {
                state.scroll_up();
            }

            InputAction::ScrollDown => {
                state.scroll_down();
            }

            InputAction::ScrollTop => {
                state.scroll_offset = 0;
            }

            InputAction::ScrollBottom => {
                state.scroll_to_bottom();
            }

            InputAction::None => {}
        }
    }
}

/// Ask the answer service on its own task and report back over `tx`
fn spawn_query(
    service: Arc<dyn AnswerService>,
    pending: PendingQuery,
    tx: mpsc::Sender<ResponseEvent>,
) {
    tokio::spawn(async move {
        let outcome = service.ask(&pending.query).await;
        if tx
            .send(ResponseEvent::Resolved {
                ticket: pending.ticket,
                outcome,
            })
            .await
            .is_err()
        {
            debug!(ticket = pending.ticket, "Chat loop gone, dropping answer");
        }
    });
}

/// Apply every outcome that has arrived; returns how many were accepted
fn drain_responses(state: &mut ChatState, rx: &mut mpsc::Receiver<ResponseEvent>) -> usize {
    let mut accepted = 0;
    while let Ok(event) = rx.try_recv() {
        match event {
            ResponseEvent::Resolved { ticket, outcome } => {
                if state.session.resolve(ticket, outcome) {
                    accepted += 1;
                }
            }
        }
    }
    state.sync_scroll();
    accepted
}

/// Hand the next link of the latest answer to the system browser
fn open_next_link(state: &mut ChatState) {
    let Some((position, total, url)) = state.take_next_link() else {
        state.status_message = Some("No links in the latest answer".into());
        return;
    };
    match open::that_detached(&url) {
        Ok(()) => {
            info!(url = url.as_str(), "Opened link externally");
            state.status_message = Some(format!("Opened link {position}/{total}: {url}"));
        }
        Err(err) => {
            warn!(url = url.as_str(), error = %err, "Failed to open link");
            state.status_message = Some(format!("Could not open {url}: {err}"));
        }
    }
}
