//! # State Module
//!
//! Long-lived values the shell carries between commands.
//!
//! - [`ShellConfig`] - Settings from flags, environment and defaults
//! - [`Session`] - The menu and where it is saved

pub mod config;
pub mod session;

pub use config::ShellConfig;
pub use session::{Session, Startup};
