//! Clipboard helper process for X11 and Wayland.
//!
//! A selection only lives as long as the process that set it. `spawn` starts a
//! detached copy of this binary in the hidden `--clipboard-daemon` mode and
//! pipes the text to it; the helper takes the selection, reports back on one
//! line of stdout and keeps serving until another program takes over.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use arboard::SetExtLinux;

use super::{ClipboardError, Selection, linux_kind};

const DAEMON_FLAG: &str = "--clipboard-daemon";
const READY: &str = "ready";
const FAILED: &str = "failed: ";

fn daemon_args(selection: Selection) -> [&'static str; 2] {
    [DAEMON_FLAG, selection.as_str()]
}

/// Hands `text` to a new helper process and waits until it owns `selection`.
///
/// The helper is never reaped; it outlives this process.
#[allow(clippy::zombie_processes)]
pub fn spawn(selection: Selection, text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(std::env::current_exe()?)
        .args(daemon_args(selection))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn()?;

    // Dropping stdin closes the pipe, which ends the helper's read.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| ClipboardError::Helper("no status pipe".to_string()))?;

    wait_ready(BufReader::new(stdout))
}

/// Reads the helper's status line.
fn wait_ready(mut status: impl BufRead) -> Result<(), ClipboardError> {
    let mut line = String::new();
    status.read_line(&mut line)?;

    let line = line.trim_end();
    if line == READY {
        return Ok(());
    }
    let reason = line
        .strip_prefix(FAILED)
        .unwrap_or("exited before taking the selection");
    Err(ClipboardError::Helper(reason.to_string()))
}

/// Runs the helper side: read stdin, take the selection, serve it.
pub fn serve(selection: Selection) -> Result<(), ClipboardError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let mut stdout = io::stdout();
    let mut board = match take(selection, &text) {
        Ok(board) => board,
        Err(e) => {
            writeln!(stdout, "{FAILED}{e}")?;
            return Err(e.into());
        }
    };
    writeln!(stdout, "{READY}")?;
    stdout.flush()?;

    // Blocks until another program owns the selection.
    board
        .set()
        .clipboard(linux_kind(selection))
        .wait()
        .text(text)?;
    Ok(())
}

fn take(selection: Selection, text: &str) -> Result<arboard::Clipboard, arboard::Error> {
    let mut board = arboard::Clipboard::new()?;
    board
        .set()
        .clipboard(linux_kind(selection))
        .text(text.to_owned())?;
    Ok(board)
}
