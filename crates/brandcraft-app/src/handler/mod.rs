//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the form, result board and alert

pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use brandcraft_core::{BrandBrief, BrandIdentity};

use crate::config::ExportSettings;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Side effects the engine performs after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Send the brief to the generation service
    Generate { ticket: u64, brief: BrandBrief },

    /// Write `hex` to the clipboard, then expire the acknowledgment for
    /// `token` after `ack_duration`
    CopyToClipboard {
        hex: String,
        token: u64,
        ack_duration: Duration,
    },

    /// Export the board (and print it if configured)
    ExportBoard {
        identity: Box<BrandIdentity>,
        settings: ExportSettings,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
