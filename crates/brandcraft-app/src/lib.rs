//! brandcraft-app - Application state and orchestration for BrandCraft
//!
//! Implements the TEA (The Elm Architecture) pattern: [`AppState`] is the
//! model, [`Message`] the events, [`handler::update`] the pure transition
//! function, and [`UpdateAction`]s the side effects the [`Engine`] runs in
//! background tasks (generation, clipboard, export).

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod export;
pub mod form;
pub mod generation;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use engine::Engine;
pub use form::{FormField, FormState, TextInput};
pub use generation::GenerationTask;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AlertState, AppState, CopyAck, ResultBoard, StatusLevel, View};
