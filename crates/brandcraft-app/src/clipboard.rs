//! System clipboard access

use brandcraft_core::prelude::*;

/// Write `text` to the system clipboard.
///
/// Blocking; call from `spawn_blocking` inside the runtime.
pub fn copy_text(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(|e| Error::clipboard(e.to_string()))
}

/// Async wrapper around [`copy_text`]
pub async fn copy_text_async(text: String) -> Result<()> {
    tokio::task::spawn_blocking(move || copy_text(&text))
        .await
        .map_err(|e| Error::clipboard(format!("clipboard task failed: {}", e)))?
}
