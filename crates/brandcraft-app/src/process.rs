//! Message processing: runs update() and dispatches the resulting actions

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use brandcraft_genai::IdentityGenerator;

use crate::actions::handle_action;
use crate::generation::GenerationTask;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are handled in the same call. Returns the generation
/// task if one was started.
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    generator: &Arc<G>,
    cancel: &CancellationToken,
) -> Option<GenerationTask>
where
    G: IdentityGenerator + Send + Sync + 'static,
{
    let mut started = None;
    let mut msg = Some(message);

    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            if let Some(task) = handle_action(action, msg_tx.clone(), generator, cancel) {
                started = Some(task);
            }
        }

        msg = result.message;
    }

    started
}
