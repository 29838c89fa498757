//! warden - tool approval gate and session uptime plugins for interactive
//! coding agents.
//!
//! The host runtime (event loop, dialogs, status bar, session tree) stays
//! external. This crate defines the capability contracts the plugins
//! consume, the plugin logic on top of them, and a JSON stdin/stdout
//! bridge for hook-style hosts.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod history;
pub mod host;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result};
