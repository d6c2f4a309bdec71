//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use brandcraft_core::BrandIdentity;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Tick event for periodic updates (animation, status expiry)
    Tick,
    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form
    // ─────────────────────────────────────────────────────────
    /// Submit the current brief for generation
    Submit,

    // ─────────────────────────────────────────────────────────
    // Generation results
    // ─────────────────────────────────────────────────────────
    GenerationCompleted {
        ticket: u64,
        identity: Box<BrandIdentity>,
    },
    GenerationFailed {
        ticket: u64,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Result board
    // ─────────────────────────────────────────────────────────
    /// Return to the form, keeping its inputs
    BackToForm,
    SelectNextSwatch,
    SelectPrevSwatch,
    /// Copy the hex code of the swatch at `index`
    CopySwatch { index: usize },
    /// Copy the hex code of the highlighted swatch
    CopySelected,
    /// The clipboard write failed; the acknowledgment still runs its course
    CopyFailed { error: String },
    /// The acknowledgment for `token` has timed out
    CopyAckExpired { token: u64 },

    /// Export the board and hand it to the print command
    Export,
    Exported {
        path: PathBuf,
        /// Name of the print program the file was sent to
        printed_with: Option<String>,
    },
    ExportFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Alert
    // ─────────────────────────────────────────────────────────
    DismissAlert,
}
