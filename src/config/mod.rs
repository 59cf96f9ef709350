//! Configuration module for burnrate
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (display and ticker preferences)

pub mod paths;
pub mod settings;

pub use paths::BurnRatePaths;
pub use settings::{Settings, SymbolPosition};
