//! Keystroke injection backed by the `enigo` crate.
//!
//! [`EnigoKeyboard`] opens its [`Enigo`] connection on the first keystroke
//! and keeps it for the rest of the typing session.  After a failed key event
//! the connection is dropped, so the next session starts from a fresh one.
//!
//! Line breaks and tabs are sent as key clicks rather than text: enigo's
//! macOS text path prefixes a chunk that starts with a line break with
//! U+200B.  A `'\r'` clicks Return and a `'\n'` right after it is skipped, so
//! CRLF text gives one line break per line.
//!
//! `Enigo` is not `Send`, so an `EnigoKeyboard` must be created on the thread
//! that types.

use enigo::{Direction, Enigo, Key, Keyboard, Settings};

use super::{InjectError, KeySink};

/// How a single character reaches the focused window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stroke {
    /// Click a key.
    Key(Key),
    /// Hand the character to `Enigo::text`.
    Text,
    /// Emit nothing.
    Skip,
}

/// Pick the stroke for `c`.  `after_cr` is true when the previous character
/// typed was `'\r'`.
fn stroke_for(c: char, after_cr: bool) -> Stroke {
    match c {
        '\n' if after_cr => Stroke::Skip,
        '\n' | '\r' => Stroke::Key(Key::Return),
        '\t' => Stroke::Key(Key::Tab),
        _ => Stroke::Text,
    }
}

/// [`KeySink`] that types characters into the focused window.
#[derive(Default)]
pub struct EnigoKeyboard {
    enigo: Option<Enigo>,
    after_cr: bool,
}

impl EnigoKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn connection(&mut self) -> Result<&mut Enigo, InjectError> {
        match &mut self.enigo {
            Some(enigo) => Ok(enigo),
            slot @ None => {
                let enigo = Enigo::new(&Settings::default())
                    .map_err(|e| InjectError::KeyboardInit(e.to_string()))?;
                Ok(slot.insert(enigo))
            }
        }
    }
}

impl KeySink for EnigoKeyboard {
    /// Emit `c`, letting enigo pick the key sequence (including any Shift or
    /// dead keys) for the active layout.
    fn type_char(&mut self, c: char) -> Result<(), InjectError> {
        let stroke = stroke_for(c, self.after_cr);
        self.after_cr = c == '\r';

        let result = match stroke {
            Stroke::Skip => return Ok(()),
            Stroke::Key(key) => self.connection()?.key(key, Direction::Click),
            Stroke::Text => {
                let mut buf = [0u8; 4];
                self.connection()?.text(c.encode_utf8(&mut buf))
            }
        };
        if let Err(e) = result {
            self.enigo = None;
            return Err(InjectError::KeySimulation(e.to_string()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
