//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;

use brandcraft_core::prelude::*;

use crate::message::Message;

/// Spawn a task that turns SIGINT/SIGTERM into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("Signal handler error: {}", e);
            return;
        }

        info!("Shutdown signal received");
        let _ = tx.send(Message::Quit).await;
    });
}

async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => debug!("Received SIGINT"),
            _ = sigterm.recv() => debug!("Received SIGTERM"),
        }
        Ok(())
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok(())
    }
}
