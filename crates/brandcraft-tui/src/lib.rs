//! brandcraft-tui - Terminal UI for BrandCraft
//!
//! Renders the brief form and the identity board with ratatui and feeds
//! crossterm key events into the [`brandcraft_app::Engine`].

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use runner::run;
