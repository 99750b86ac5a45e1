//! Terminal User Interface module
//!
//! An interactive dashboard built on ratatui: client info beside the budget
//! cards, with dialogs for editing values and client details.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
