//! System clipboard access.
//!
//! A thin wrapper around `arboard`. On X11/Wayland the reads and writes can be
//! pointed at the primary selection (the highlighted text) instead of the
//! regular clipboard; elsewhere that switch does nothing.

use std::io;

use clap::ValueEnum;
use thiserror::Error;

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
mod daemon;

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
use arboard::{GetExtLinux, LinuxClipboardKind};

/// Whether this platform has a primary selection distinct from the clipboard.
pub const HAS_PRIMARY: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),

    #[error("clipboard helper I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("clipboard helper failed: {0}")]
    Helper(String),
}

/// Which X11/Wayland selection a write goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    Clipboard,
    Primary,
}

impl Selection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clipboard => "clipboard",
            Self::Primary => "primary",
        }
    }
}

/// Clipboard operations used by a translation run.
pub trait Clipboard {
    /// Routes subsequent reads and writes to the primary selection.
    fn set_primary(&mut self, enabled: bool);

    /// Reads the current text. No text content reads as an empty string.
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    /// Writes `text`. The content stays available after the process exits.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    primary: bool,
}

impl SystemClipboard {
    pub const fn new() -> Self {
        Self { primary: false }
    }

    pub const fn is_primary(&self) -> bool {
        self.primary
    }

    pub const fn selection(&self) -> Selection {
        if self.primary {
            Selection::Primary
        } else {
            Selection::Clipboard
        }
    }
}

impl Clipboard for SystemClipboard {
    fn set_primary(&mut self, enabled: bool) {
        self.primary = enabled && HAS_PRIMARY;
    }

    fn read_text(&mut self) -> Result<String, ClipboardError> {
        let mut board = arboard::Clipboard::new()?;
        let get = board.get();
        #[cfg(all(
            unix,
            not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
        ))]
        let get = get.clipboard(linux_kind(self.selection()));

        match get.text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    // X11 and Wayland selections die with the process that owns them, so the
    // text is handed to a detached helper that keeps serving it.
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        daemon::spawn(self.selection(), text)
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        arboard::Clipboard::new()?.set_text(text.to_owned())?;
        Ok(())
    }
}

/// Entry point of the hidden `--clipboard-daemon` mode.
///
/// Reads the text from stdin and owns `selection` until another program
/// replaces it.
pub fn serve_daemon(selection: Selection) -> Result<(), ClipboardError> {
    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    {
        daemon::serve(selection)
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    {
        Err(ClipboardError::Helper(format!(
            "no {} selection to serve on this platform",
            selection.as_str()
        )))
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
const fn linux_kind(selection: Selection) -> LinuxClipboardKind {
    match selection {
        Selection::Clipboard => LinuxClipboardKind::Clipboard,
        Selection::Primary => LinuxClipboardKind::Primary,
    }
}
