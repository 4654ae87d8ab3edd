//! Headless mode runner - one fetch, reported as JSON, without the TUI
//!
//! Mounts the start route through the same Engine the TUI uses, waits for the
//! result of that first fetch and reports it on stdout.

use std::io::{self, Write};

use rickdex_app::{message::Message, state::AppState, CharacterSource, Engine};
use rickdex_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<S>(mut engine: Engine<S>) -> Result<()>
where
    S: CharacterSource + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("rickdex starting in HEADLESS mode");
    info!("Route: {}", engine.state.route());
    info!("═══════════════════════════════════════════════════════");

    engine.start();

    let mut stdout = io::stdout();
    let result = headless_event_loop(&mut engine, &mut stdout).await;

    info!("rickdex headless mode exiting");
    result
}

/// Process messages until the start route's fetch has been answered or a quit
/// is requested
async fn headless_event_loop<S, W>(engine: &mut Engine<S>, out: &mut W) -> Result<()>
where
    S: CharacterSource + Sync + 'static,
    W: Write,
{
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        let Some(msg) = engine.next_message().await else {
            info!("Message channel closed");
            break;
        };

        // Captured before processing: the reply consumes the pending request
        let event = result_event(&engine.state, &msg);
        engine.process_message(msg);

        if let Some(event) = event {
            event.write_to(out);
            break;
        }
    }

    Ok(())
}

/// Map a fetch reply addressed to the mounted view to its event
fn result_event(state: &AppState, msg: &Message) -> Option<HeadlessEvent> {
    let pending = match (state.list(), state.detail()) {
        (Some(list), _) => list.pending,
        (None, Some(detail)) => detail.pending,
        (None, None) => None,
    };
    let profile_id = state.detail().map(|detail| detail.id);

    let event = match msg {
        Message::PageLoaded { request, page } if pending == Some(*request) => {
            let current = state.list().map(|list| list.pagination.current())?;
            HeadlessEvent::page_loaded(current, page)
        }
        Message::CharacterLoaded { request, character }
            if pending == Some(*request) && profile_id == Some(character.id) =>
        {
            HeadlessEvent::character_loaded(character.as_ref().clone())
        }
        Message::PageLoadFailed { request, error, .. }
        | Message::CharacterLoadFailed { request, error, .. }
            if pending == Some(*request) =>
        {
            HeadlessEvent::request_failed(state.route().path(), error.as_str())
        }
        Message::PageLoaded { .. }
        | Message::CharacterLoaded { .. }
        | Message::PageLoadFailed { .. }
        | Message::CharacterLoadFailed { .. } => {
            warn!("Dropping reply that does not match the mounted view");
            return None;
        }
        _ => return None,
    };

    Some(event)
}
