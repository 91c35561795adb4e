//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

/// Exit codes for fatal errors.
pub mod exit;

pub use args::{Args, normalize_legacy_flags};
pub use exit::exit_code;
