//! Cancellable background generation request

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use brandcraft_core::prelude::*;
use brandcraft_core::BrandBrief;
use brandcraft_genai::IdentityGenerator;

use crate::actions::post;
use crate::message::Message;

/// One in-flight generation request.
///
/// The task always reports back with `GenerationCompleted` or
/// `GenerationFailed` for its ticket, including when it is cancelled.
#[derive(Debug)]
pub struct GenerationTask {
    ticket: u64,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl GenerationTask {
    /// Spawn the request on the tokio runtime.
    ///
    /// `parent` cancels this task along with everything else it owns.
    pub fn spawn<G>(
        ticket: u64,
        brief: BrandBrief,
        generator: Arc<G>,
        msg_tx: mpsc::Sender<Message>,
        parent: &CancellationToken,
    ) -> Self
    where
        G: IdentityGenerator + Send + Sync + 'static,
    {
        let cancel = parent.child_token();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = token.cancelled() => Err(Error::Cancelled),
                result = generator.generate(&brief) => result,
            };

            let msg = match outcome {
                Ok(identity) => Message::GenerationCompleted {
                    ticket,
                    identity: Box::new(identity),
                },
                Err(e) => {
                    if e.is_recoverable() {
                        debug!("Generation #{} ended with error: {}", ticket, e);
                    } else {
                        warn!("Generation #{} hit an unexpected error: {}", ticket, e);
                    }
                    Message::GenerationFailed {
                        ticket,
                        error: e.to_string(),
                    }
                }
            };

            if let Err(e) = post(&msg_tx, msg, "generation result").await {
                debug!("Generation #{} finished after the receiver closed: {}", ticket, e);
            }
        });

        Self {
            ticket,
            cancel,
            handle,
        }
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel and wait up to `timeout` for the task to wind down
    pub async fn shutdown(self, timeout: Duration) {
        self.cancel.cancel();
        match tokio::time::timeout(timeout, self.handle).await {
            Ok(Ok(())) => debug!("Generation #{} stopped", self.ticket),
            Ok(Err(e)) => warn!("Generation #{} panicked: {}", self.ticket, e),
            Err(_) => warn!("Generation #{} did not stop in time", self.ticket),
        }
    }
}
