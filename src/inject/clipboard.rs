//! Clipboard reader backed by the `arboard` crate.
//!
//! A short-lived [`arboard::Clipboard`] handle is created for every read
//! rather than held across calls, because `arboard::Clipboard` is not `Send`
//! on all platforms and the handle is cheap to create.

use arboard::Clipboard;

use super::{ClipboardSource, InjectError};

/// The system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSource for SystemClipboard {
    /// Capture the current clipboard plain-text content.
    ///
    /// Returns `Ok(None)` when the clipboard is empty or contains non-text
    /// data (e.g. an image).
    ///
    /// # Errors
    ///
    /// [`InjectError::ClipboardAccess`] if the OS clipboard cannot be opened,
    /// [`InjectError::ClipboardRead`] for any other read failure.
    fn read_text(&mut self) -> Result<Option<String>, InjectError> {
        let mut clipboard = open_clipboard()?;
        match clipboard.get_text() {
            Ok(text) if text.is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(InjectError::ClipboardRead(e.to_string())),
        }
    }
}

/// Open an `arboard::Clipboard` handle, mapping the error to [`InjectError`].
fn open_clipboard() -> Result<Clipboard, InjectError> {
    Clipboard::new().map_err(|e| InjectError::ClipboardAccess(e.to_string()))
}
