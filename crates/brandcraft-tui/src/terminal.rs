//! Terminal setup and restoration

use brandcraft_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter raw mode and the alternate screen.
///
/// Installs a panic hook first so a panic anywhere in the UI leaves the
/// shell usable.
pub fn enter() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave the alternate screen; failures are logged only
pub fn leave() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::try_restore();
        original_hook(panic_info);
    }));
}
