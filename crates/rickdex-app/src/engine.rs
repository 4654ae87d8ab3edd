//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the unified message channel and the
//! character source. Both frontends drive it the same way: `start()` once,
//! then feed it messages until `should_quit()`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use rickdex_api::CharacterSource;

use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for rickdex.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - The character source fetch tasks call into
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Where characters come from
    source: Arc<S>,
}

impl<S> Engine<S>
where
    S: CharacterSource + Sync + 'static,
{
    /// Create a new Engine.
    ///
    /// Must be called inside a tokio runtime: the signal handler is spawned
    /// here.
    pub fn new(state: AppState, source: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            source: Arc::new(source),
        }
    }

    /// Mount the start route, issuing its first fetch
    pub fn start(&mut self) {
        info!("Starting at {}", self.state.route());
        self.process_message(Message::Init);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.source);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message on the channel.
    ///
    /// `None` only if every sender is gone, which cannot happen while the
    /// engine holds `msg_tx`.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::route::Route;
    use rickdex_api::test_utils::{test_character, test_page, FakeSource, FetchCall};

    #[tokio::test]
    async fn test_start_fetches_start_route() {
        let source = FakeSource::new().with_character(test_character(2, "Morty Smith"));
        let state = AppState::new(Route::Profile { id: 2 }, Settings::default());
        let mut engine = Engine::new(state, source);

        engine.start();
        let reply = engine.next_message().await.unwrap();
        engine.process_message(reply);

        assert!(!engine.state.is_loading());
        assert_eq!(engine.source().calls(), vec![FetchCall::Character(2)]);
    }

    #[tokio::test]
    async fn test_drain_processes_queued_messages() {
        let source = FakeSource::new().with_page(1, test_page(1, vec![]));
        let mut engine = Engine::new(AppState::default(), source);

        engine.msg_sender().send(Message::Quit).await.unwrap();
        assert_eq!(engine.drain_pending_messages(), 1);
        assert!(engine.should_quit());
    }
}
