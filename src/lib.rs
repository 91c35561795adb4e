//! # tclip - Clipboard Translator
//!
//! `tclip` translates the text you have selected and puts the translation on
//! the clipboard, announcing it with a desktop notification. It is meant to
//! be bound to a hotkey.
//!
//! ## Backends
//!
//! - **Classical** (default): Google Cloud Translation (NMT). The source
//!   language is detected first; text already in the language you know is
//!   translated into the language you are learning, anything else into the
//!   language you know. Needs `GOOGLE_TRANSLATE_APIKEY`.
//! - **LLM** (`--llm`): Gemini with a fixed translator instruction
//!   (English to Korean, everything else to English). Needs `GEMINI_APIKEY`.
//!
//! ## Quick Start
//!
//! ```bash
//! # English <-> Korean with the classical backend
//! tclip
//!
//! # Japanese learner, keep the original above the translation
//! tclip -l ja --append
//!
//! # Show the language codes the classical backend understands
//! tclip --list
//! ```
//!
//! ## Configuration
//!
//! Defaults can be stored in `~/.config/tclip/config.toml`:
//!
//! ```toml
//! [tclip]
//! known = "en"
//! learn = "ko"
//!
//! [notification]
//! urgency = "low"
//! ```

/// System clipboard access via arboard.
pub mod clipboard;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Desktop notifications via notify-rust.
pub mod notify;

/// The clipboard-to-clipboard translation flow.
pub mod orchestrator;

/// Global output configuration (quiet mode, colors, stderr logging).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation backends (Cloud Translation and Gemini).
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
