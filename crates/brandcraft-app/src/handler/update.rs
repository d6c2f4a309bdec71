//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use brandcraft_core::prelude::*;

use super::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::{AlertState, AppState, View};

/// Process a message and update state.
/// Returns an optional action for the event loop to execute.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            state.expire_status(Instant::now());
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form
        // ─────────────────────────────────────────────────────────
        Message::Submit => handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Generation results
        // ─────────────────────────────────────────────────────────
        Message::GenerationCompleted { ticket, identity } => {
            if !state.finish_generation(ticket) {
                debug!("Ignoring stale result for generation #{}", ticket);
                return UpdateResult::none();
            }
            info!("Generation #{} produced '{}'", ticket, identity.name);
            state.last_failure = None;
            state.copied = None;
            state.show_result(*identity);
            UpdateResult::none()
        }

        Message::GenerationFailed { ticket, error } => {
            if !state.finish_generation(ticket) {
                debug!("Ignoring stale failure for generation #{}", ticket);
                return UpdateResult::none();
            }
            error!("Generation #{} failed: {}", ticket, error);
            state.last_failure = Some(error);
            state.alert = Some(AlertState::generation_failed());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Result board
        // ─────────────────────────────────────────────────────────
        Message::BackToForm => {
            if matches!(state.view, View::Result(_)) {
                state.show_form();
            }
            UpdateResult::none()
        }

        Message::SelectNextSwatch => {
            if let Some(board) = state.result_board_mut() {
                board.select_next();
            }
            UpdateResult::none()
        }

        Message::SelectPrevSwatch => {
            if let Some(board) = state.result_board_mut() {
                board.select_prev();
            }
            UpdateResult::none()
        }

        Message::CopySwatch { index } => {
            let hex = state
                .result_board()
                .and_then(|board| board.identity.colors.get(index))
                .map(|swatch| swatch.hex.clone());
            match hex {
                Some(hex) => {
                    if let Some(board) = state.result_board_mut() {
                        board.selected = index;
                    }
                    copy_hex(state, hex)
                }
                None => UpdateResult::none(),
            }
        }

        Message::CopySelected => {
            let hex = state
                .result_board()
                .and_then(|board| board.selected_swatch())
                .map(|swatch| swatch.hex.clone());
            match hex {
                Some(hex) => copy_hex(state, hex),
                None => UpdateResult::none(),
            }
        }

        Message::CopyFailed { error } => {
            warn!("Clipboard write failed: {}", error);
            state.set_error_status(format!("Copy failed: {}", error));
            UpdateResult::none()
        }

        Message::CopyAckExpired { token } => {
            state.expire_copy(token);
            UpdateResult::none()
        }

        Message::Export => match state.result_board() {
            Some(board) => {
                let identity = Box::new(board.identity.clone());
                state.set_status("Exporting board...");
                UpdateResult::action(UpdateAction::ExportBoard {
                    identity,
                    settings: state.settings.export.clone(),
                })
            }
            None => UpdateResult::none(),
        },

        Message::Exported { path, printed_with } => {
            let text = match printed_with {
                Some(program) => format!("Exported to {} and sent to {}", path.display(), program),
                None => format!("Exported to {}", path.display()),
            };
            state.set_status(text);
            UpdateResult::none()
        }

        Message::ExportFailed { error } => {
            warn!("Export failed: {}", error);
            state.set_error_status(format!("Export failed: {}", error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Alert
        // ─────────────────────────────────────────────────────────
        Message::DismissAlert => {
            state.alert = None;
            UpdateResult::none()
        }
    }
}

/// Validate the form and start a generation.
///
/// Silently does nothing while a request is pending or when idea or
/// industry is empty.
fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.loading {
        debug!("Submit ignored: generation already in flight");
        return UpdateResult::none();
    }
    if !state.form.is_submittable() {
        return UpdateResult::none();
    }

    let brief = state.form.brief();
    let ticket = state.begin_generation();
    info!("Starting generation #{} ({})", ticket, brief.vibe);
    UpdateResult::action(UpdateAction::Generate { ticket, brief })
}

fn copy_hex(state: &mut AppState, hex: String) -> UpdateResult {
    let token = state.acknowledge_copy(hex.clone());
    UpdateResult::action(UpdateAction::CopyToClipboard {
        hex,
        token,
        ack_duration: state.settings.ui.copy_ack_duration(),
    })
}
