//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use brandcraft_core::prelude::*;
use brandcraft_genai::IdentityGenerator;

use crate::clipboard;
use crate::export;
use crate::generation::GenerationTask;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task.
///
/// Returns the [`GenerationTask`] when the action started one, so the
/// caller can cancel it on shutdown.
pub fn handle_action<G>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    generator: &Arc<G>,
    cancel: &CancellationToken,
) -> Option<GenerationTask>
where
    G: IdentityGenerator + Send + Sync + 'static,
{
    match action {
        UpdateAction::Generate { ticket, brief } => Some(GenerationTask::spawn(
            ticket,
            brief,
            Arc::clone(generator),
            msg_tx,
            cancel,
        )),

        UpdateAction::CopyToClipboard {
            hex,
            token,
            ack_duration,
        } => {
            // The expiry clock starts at copy time, not when the write returns
            let expiry_tx = msg_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(ack_duration).await;
                let _ = post(&expiry_tx, Message::CopyAckExpired { token }, "copy expiry").await;
            });

            tokio::spawn(async move {
                match clipboard::copy_text_async(hex.clone()).await {
                    Ok(()) => debug!("Copied {} to clipboard", hex),
                    Err(e) => {
                        let msg = Message::CopyFailed {
                            error: e.to_string(),
                        };
                        let _ = post(&msg_tx, msg, "copy failure")
                            .await
                            .with_context(|| format!("Copy failure for {} went unreported", hex));
                    }
                }
            });
            None
        }

        UpdateAction::ExportBoard { identity, settings } => {
            tokio::spawn(async move {
                let msg = match export::export_board(&identity, &settings).await {
                    Ok(outcome) => Message::Exported {
                        path: outcome.path,
                        printed_with: outcome.printed_with,
                    },
                    Err(e) => Message::ExportFailed {
                        error: e.to_string(),
                    },
                };
                let _ = post(&msg_tx, msg, "export result")
                    .await
                    .context("Export finished after the message channel closed");
            });
            None
        }
    }
}

/// Hand a background result back to the update loop
pub(crate) async fn post(msg_tx: &mpsc::Sender<Message>, msg: Message, what: &str) -> Result<()> {
    msg_tx
        .send(msg)
        .await
        .map_err(|_| Error::channel_send(what))
}
