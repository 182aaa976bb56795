//! Text injection module: replays text as paced synthetic keystrokes.
//!
//! # Overview
//!
//! [`TextInjector::type_text`] walks the text one `char` at a time:
//!
//! 1. **Type** the character through a [`KeySink`] (enigo in production).
//! 2. **Sleep** for the [`DelayModel`] delay of that character.
//!
//! The clipboard side lives behind [`ClipboardSource`] so the hotkey trigger
//! can be exercised without a real clipboard.
//!
//! # Usage
//!
//! ```no_run
//! use human_typer::config::TypingConfig;
//! use human_typer::inject::{EnigoKeyboard, TextInjector};
//! use human_typer::typing::DelayModel;
//!
//! let delay = DelayModel::new(TypingConfig::default());
//! let mut injector = TextInjector::new(EnigoKeyboard::new(), delay);
//! injector.type_text("hello, world").expect("injection failed");
//! ```

pub mod clipboard;
pub mod keyboard;

#[cfg(test)]
pub mod mock;

pub use clipboard::SystemClipboard;
pub use keyboard::EnigoKeyboard;

use std::time::Duration;

use thiserror::Error;

use crate::typing::DelayModel;

// ---------------------------------------------------------------------------
// InjectError
// ---------------------------------------------------------------------------

/// All errors that can surface while reading the clipboard or typing.
#[derive(Debug, Error)]
pub enum InjectError {
    /// Could not open the system clipboard.
    #[error("cannot access clipboard: {0}")]
    ClipboardAccess(String),

    /// The clipboard was opened but reading its text failed.
    #[error("cannot read clipboard text: {0}")]
    ClipboardRead(String),

    /// The keystroke backend could not be initialised.
    #[error("cannot initialise keyboard backend: {0}")]
    KeyboardInit(String),

    /// Could not deliver a synthetic key event.
    #[error("cannot simulate key press: {0}")]
    KeySimulation(String),
}

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// Something that can emit one character into the focused application.
pub trait KeySink {
    fn type_char(&mut self, c: char) -> Result<(), InjectError>;
}

/// Blocking wait between keystrokes.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Read-only, text-only access to the clipboard.
pub trait ClipboardSource {
    /// Current clipboard text.
    ///
    /// `Ok(None)` when the clipboard is empty or holds non-text data.
    fn read_text(&mut self) -> Result<Option<String>, InjectError>;
}

/// [`Sleeper`] backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// ---------------------------------------------------------------------------
// TextInjector
// ---------------------------------------------------------------------------

/// Types text character by character with human-like pauses.
pub struct TextInjector<K, S = ThreadSleeper> {
    keys: K,
    sleeper: S,
    delay: DelayModel,
}

impl<K: KeySink> TextInjector<K> {
    /// Create an injector that sleeps on the calling thread.
    pub fn new(keys: K, delay: DelayModel) -> Self {
        Self::with_sleeper(keys, ThreadSleeper, delay)
    }
}

impl<K: KeySink, S: Sleeper> TextInjector<K, S> {
    pub fn with_sleeper(keys: K, sleeper: S, delay: DelayModel) -> Self {
        Self {
            keys,
            sleeper,
            delay,
        }
    }

    /// Type `text` into whatever application currently has input focus.
    ///
    /// Blocks until every character has been typed.  Empty text is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the first [`InjectError`] from the key sink; the remaining
    /// characters are not typed.
    pub fn type_text(&mut self, text: &str) -> Result<(), InjectError> {
        if text.is_empty() {
            return Ok(());
        }

        for c in text.chars() {
            self.keys.type_char(c)?;
            self.sleeper.sleep(self.delay.duration(c));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::mock::{step_log, MockKeys, MockSleeper, Step};
    use super::*;
    use crate::config::TypingConfig;

    fn injector(keys: MockKeys, sleeper: MockSleeper) -> TextInjector<MockKeys, MockSleeper> {
        TextInjector::with_sleeper(keys, sleeper, DelayModel::new(TypingConfig::default()))
    }

    #[test]
    fn empty_text_types_nothing() {
        let log = step_log();
        let mut inj = injector(MockKeys::new(&log), MockSleeper::new(&log));

        inj.type_text("").expect("empty text");

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn types_each_char_in_order_with_sleep_between() {
        let log = step_log();
        let mut inj = injector(MockKeys::new(&log), MockSleeper::new(&log));

        inj.type_text("ab").expect("typing");

        let steps = log.borrow();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0], Step::Key('a'));
        assert!(matches!(steps[1], Step::Sleep(d) if d >= Duration::from_millis(50)));
        assert_eq!(steps[2], Step::Key('b'));
        assert!(matches!(steps[3], Step::Sleep(_)));
    }

    #[test]
    fn each_char_typed_exactly_once() {
        let log = step_log();
        let mut inj = injector(MockKeys::new(&log), MockSleeper::new(&log));

        inj.type_text("hi there\n").expect("typing");

        let typed: String = log
            .borrow()
            .iter()
            .filter_map(|s| match s {
                Step::Key(c) => Some(*c),
                Step::Sleep(_) => None,
            })
            .collect();
        assert_eq!(typed, "hi there\n");
    }

    #[test]
    fn boundary_chars_sleep_at_least_boundary_delay() {
        let log = step_log();
        let mut inj = injector(MockKeys::new(&log), MockSleeper::new(&log));

        inj.type_text(" . ").expect("typing");

        for step in log.borrow().iter() {
            if let Step::Sleep(d) = step {
                // min delay 0.05 + boundary 0.1
                assert!(*d >= Duration::from_millis(150), "short sleep {d:?}");
            }
        }
    }

    #[test]
    fn non_ascii_chars_are_typed_whole() {
        let log = step_log();
        let mut inj = injector(MockKeys::new(&log), MockSleeper::new(&log));

        inj.type_text("é✓").expect("typing");

        let steps = log.borrow();
        assert_eq!(steps[0], Step::Key('é'));
        assert_eq!(steps[2], Step::Key('✓'));
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn key_failure_propagates_and_stops() {
        let log = step_log();
        let mut inj = injector(MockKeys::failing_on(&log, 'b'), MockSleeper::new(&log));

        let err = inj.type_text("abc").unwrap_err();

        assert!(matches!(err, InjectError::KeySimulation(_)));
        let steps = log.borrow();
        assert_eq!(steps.len(), 2, "only 'a' and its sleep: {steps:?}");
        assert_eq!(steps[0], Step::Key('a'));
    }
}
