//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use brandcraft_core::{BrandIdentity, Swatch};

use crate::config::Settings;
use crate::form::FormState;

/// Alert text shown for every generation failure
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to manifest brand. Please try again.";

/// How long footer status messages stay visible
pub const STATUS_LIFETIME: Duration = Duration::from_secs(4);

/// Which screen is showing.
///
/// The result board only exists once a generation has succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Form,
    Result(ResultBoard),
}

/// A generated identity plus the highlighted swatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultBoard {
    pub identity: BrandIdentity,
    pub selected: usize,
}

impl ResultBoard {
    pub fn new(identity: BrandIdentity) -> Self {
        Self {
            identity,
            selected: 0,
        }
    }

    pub fn selected_swatch(&self) -> Option<&Swatch> {
        self.identity.colors.get(self.selected)
    }

    pub fn select_next(&mut self) {
        let count = self.identity.colors.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.identity.colors.len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }
}

/// Blocking modal shown over the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
}

impl AlertState {
    pub fn generation_failed() -> Self {
        Self {
            title: "Generation Failed".to_string(),
            message: GENERATION_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Marker for the most recently copied hex code.
///
/// Each copy gets a fresh token so an older expiry can't clear a newer ack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyAck {
    pub hex: String,
    pub token: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Transient footer message
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub expires_at: Instant,
}

impl StatusMessage {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub view: View,
    pub form: FormState,

    /// A generation request is in flight
    pub loading: bool,

    pub alert: Option<AlertState>,
    pub copied: Option<CopyAck>,
    pub status: Option<StatusMessage>,

    /// Error text of the most recent failed generation (logged, never shown)
    pub last_failure: Option<String>,

    pub settings: Settings,

    /// Tick counter driving the loading animation
    pub tick: u64,

    pending_ticket: Option<u64>,
    next_ticket: u64,
    next_copy_token: u64,
    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            view: View::Form,
            form: FormState::with_vibe(settings.ui.default_vibe),
            loading: false,
            alert: None,
            copied: None,
            status: None,
            last_failure: None,
            settings,
            tick: 0,
            pending_ticket: None,
            next_ticket: 1,
            next_copy_token: 1,
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Generation lifecycle
    // ─────────────────────────────────────────────────────────

    /// Mark a request as in flight and return its ticket
    pub fn begin_generation(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending_ticket = Some(ticket);
        self.loading = true;
        ticket
    }

    /// Settle the request for `ticket`.
    ///
    /// Returns `false` (and changes nothing) when `ticket` is not the
    /// request currently in flight.
    pub fn finish_generation(&mut self, ticket: u64) -> bool {
        if self.pending_ticket != Some(ticket) {
            return false;
        }
        self.pending_ticket = None;
        self.loading = false;
        true
    }

    pub fn pending_ticket(&self) -> Option<u64> {
        self.pending_ticket
    }

    // ─────────────────────────────────────────────────────────
    // View helpers
    // ─────────────────────────────────────────────────────────

    pub fn result_board(&self) -> Option<&ResultBoard> {
        match &self.view {
            View::Result(board) => Some(board),
            View::Form => None,
        }
    }

    pub fn result_board_mut(&mut self) -> Option<&mut ResultBoard> {
        match &mut self.view {
            View::Result(board) => Some(board),
            View::Form => None,
        }
    }

    pub fn show_result(&mut self, identity: BrandIdentity) {
        self.view = View::Result(ResultBoard::new(identity));
    }

    pub fn show_form(&mut self) {
        self.view = View::Form;
        self.copied = None;
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Copy acknowledgment
    // ─────────────────────────────────────────────────────────

    /// Record a copy of `hex` and return the token for its expiry
    pub fn acknowledge_copy(&mut self, hex: impl Into<String>) -> u64 {
        let token = self.next_copy_token;
        self.next_copy_token += 1;
        self.copied = Some(CopyAck {
            hex: hex.into(),
            token,
        });
        token
    }

    /// Clear the acknowledgment if it still carries `token`
    pub fn expire_copy(&mut self, token: u64) -> bool {
        match &self.copied {
            Some(ack) if ack.token == token => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_copied(&self, hex: &str) -> bool {
        self.copied.as_ref().is_some_and(|ack| ack.hex == hex)
    }

    // ─────────────────────────────────────────────────────────
    // Status line
    // ─────────────────────────────────────────────────────────

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.push_status(text.into(), StatusLevel::Info);
    }

    pub fn set_error_status(&mut self, text: impl Into<String>) {
        self.push_status(text.into(), StatusLevel::Error);
    }

    fn push_status(&mut self, text: String, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text,
            level,
            expires_at: Instant::now() + STATUS_LIFETIME,
        });
    }

    /// Drop the status message once its lifetime has passed
    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
