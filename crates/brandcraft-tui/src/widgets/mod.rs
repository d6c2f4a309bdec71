//! Widgets for the BrandCraft screens

mod alert_dialog;
mod brand_form;
mod header;
mod identity_board;
pub mod modal_overlay;
mod status_bar;

pub use alert_dialog::AlertDialog;
pub use brand_form::{spinner_frame, BrandForm};
pub use header::Header;
pub use identity_board::IdentityBoard;
pub use status_bar::StatusBar;
