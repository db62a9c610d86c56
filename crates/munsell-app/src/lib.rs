//! Munsell color picker application
//!
//! The application shell: window, GPU surface, egui integration, and the
//! dialogs around the two pickers.

mod app;
mod config;
mod ui;

pub use app::{App, AppError};
pub use config::AppConfig;
pub use ui::{UiAction, UiState, render_ui};
