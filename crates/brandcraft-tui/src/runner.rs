//! Main TUI runner: terminal lifecycle and the draw/poll loop

use brandcraft_app::{Engine, Settings};
use brandcraft_core::prelude::*;
use brandcraft_genai::IdentityGenerator;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the interactive UI until the user quits.
///
/// The terminal is restored even when the loop fails.
pub async fn run<G>(settings: Settings, generator: G) -> Result<()>
where
    G: IdentityGenerator + Send + Sync + 'static,
{
    let mut term = terminal::enter()?;
    let mut engine = Engine::new(settings, generator);
    info!("BrandCraft TUI started");

    let result = run_loop(&mut term, &mut engine);
    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }

    engine.shutdown().await;
    terminal::leave();

    info!("BrandCraft TUI exiting");
    result
}

fn run_loop<G>(term: &mut DefaultTerminal, engine: &mut Engine<G>) -> Result<()>
where
    G: IdentityGenerator + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Background results (generation, clipboard, export, signals)
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        term.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
