//! Main TUI runner - entry point and event loop

use rickdex_api::CharacterSource;
use rickdex_app::Engine;
use rickdex_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives.
///
/// The terminal is restored on every exit path, including errors.
pub async fn run<S>(mut engine: Engine<S>) -> Result<()>
where
    S: CharacterSource + Sync + 'static,
{
    let mut term = terminal::init();

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    terminal::restore();
    info!("TUI exited");
    result
}

/// Main event loop
fn run_loop<S>(term: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: CharacterSource + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results and signals
        engine.drain_pending_messages();

        // Render
        term.draw(|frame| render::view(frame, &engine.state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
