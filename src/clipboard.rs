//! Best-effort clipboard and share actions.
//!
//! The clipboard is reached through the OSC 52 terminal escape, which most
//! modern terminals (and tmux with `set-clipboard on`) forward to the system
//! clipboard. Terminals that ignore it simply show nothing.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ClipboardError;

/// Message shown by the share action.
pub const SHARE_PROMPT: &str = "To share: copy the number or use your device's share features.";

/// Builds the OSC 52 sequence that sets the system clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Copies `text` to the clipboard through the terminal behind `out`.
///
/// `available` is false when `out` is not an interactive terminal.
pub fn copy_to_clipboard<W: Write>(
    out: &mut W,
    text: &str,
    available: bool,
) -> Result<(), ClipboardError> {
    if !available {
        return Err(ClipboardError::Unavailable);
    }
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()?;
    log::debug!("Copied {:?} to clipboard", text);
    Ok(())
}
