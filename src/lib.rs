//! Nougat drawer core library.
//!
//! Orientation-aware point conversion and screen bounds for a quick-settings
//! drawer, plus the toggle and theme preferences the drawer renders from.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
