//! Command implementations.

/// Clipboard translation command handler.
pub mod translate;
