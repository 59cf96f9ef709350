//! Terminal User Interface module
//!
//! A full-screen live ticker built on ratatui. The event thread only emits
//! key and tick events; every snapshot is computed on the main thread.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

pub use app::App;
pub use terminal::run_tui;
