//! Engine - shared orchestration state for the TUI and headless runners
//!
//! Owns the TEA state, the message channel, the generator and the
//! cancellation root for background work.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use brandcraft_core::prelude::*;
use brandcraft_genai::IdentityGenerator;

use crate::config::Settings;
use crate::generation::GenerationTask;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

/// How long shutdown waits for an in-flight generation to stop
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Orchestration engine for BrandCraft.
///
/// Must be created inside a tokio runtime; it spawns the signal handler.
pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (terminal events, signals).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings (after CLI overrides)
    pub settings: Settings,

    generator: Arc<G>,
    cancel: CancellationToken,
    generation: Option<GenerationTask>,
}

impl<G> Engine<G>
where
    G: IdentityGenerator + Send + Sync + 'static,
{
    pub fn new(settings: Settings, generator: G) -> Self {
        Self::with_shared_generator(settings, Arc::new(generator))
    }

    /// Create an engine around a generator the caller keeps a handle to
    pub fn with_shared_generator(settings: Settings, generator: Arc<G>) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            generator,
            cancel: CancellationToken::new(),
            generation: None,
        }
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        if let Some(task) = process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.generator,
            &self.cancel,
        ) {
            self.generation = Some(task);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn generator(&self) -> &Arc<G> {
        &self.generator
    }

    /// A generation task is still running
    pub fn is_generating(&self) -> bool {
        self.generation.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel background work and wait for the generation task to stop
    pub async fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.cancel.cancel();
        if let Some(task) = self.generation.take() {
            task.shutdown(SHUTDOWN_TIMEOUT).await;
        }
    }
}
