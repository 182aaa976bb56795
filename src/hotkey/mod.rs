//! Global hotkey detection, backed by `rdev`.
//!
//! # Design
//!
//! `rdev::listen()` is a blocking OS-level call that never returns while the
//! process is alive.  It runs on a **dedicated OS thread** owned by
//! [`HotkeyListener`].  Every event on that thread goes through:
//!
//! ```text
//! rdev::Event ─▶ KeyNormalizer ─▶ ChordMatcher ─(fired)─▶ TriggerHandler
//!                                                          clipboard → TextInjector
//! ```
//!
//! Typing happens synchronously on the listener thread, so no further key
//! events are processed until the replay is finished.
//!
//! # Usage
//!
//! ```no_run
//! use human_typer::hotkey::{parse_chord, HotkeyListener, KeyNormalizer};
//!
//! let chord = parse_chord("Meta+H").expect("bad chord");
//! let _listener = HotkeyListener::start(chord, KeyNormalizer::detect(), || {
//!     || println!("fired")
//! });
//! ```

pub mod chord;
pub mod dispatch;
pub mod listener;
pub mod normalize;
pub mod trigger;

pub use chord::{Chord, ChordMatcher, ChordState};
pub use dispatch::HotkeyDispatcher;
pub use listener::HotkeyListener;
pub use normalize::KeyNormalizer;
pub use trigger::{ErrorReporter, LogReporter, TriggerError, TriggerHandler};

use rdev::Key;
use thiserror::Error;

// ---------------------------------------------------------------------------
// HotkeyError
// ---------------------------------------------------------------------------

/// Errors from parsing a hotkey chord string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
    /// The chord string had no keys in it.
    #[error("hotkey chord is empty")]
    Empty,

    /// One `+`-separated token did not name a known key.
    #[error("unknown key {0:?} in hotkey chord")]
    UnknownKey(String),
}

// ---------------------------------------------------------------------------
// parse_chord
// ---------------------------------------------------------------------------

/// Parse a `+`-separated chord such as `"Meta+H"` or `"Ctrl+Shift+V"`.
///
/// # Examples
///
/// ```
/// use human_typer::hotkey::parse_chord;
///
/// let chord = parse_chord("Cmd+h").unwrap();
/// assert!(chord.contains(rdev::Key::MetaLeft));
/// assert!(chord.contains(rdev::Key::KeyH));
/// assert!(parse_chord("Meta+Nope").is_err());
/// ```
pub fn parse_chord(text: &str) -> Result<Chord, HotkeyError> {
    let mut keys = Vec::new();
    for token in text.split('+').map(str::trim).filter(|t| !t.is_empty()) {
        let key = parse_key(token).ok_or_else(|| HotkeyError::UnknownKey(token.to_string()))?;
        keys.push(key);
    }
    if keys.is_empty() {
        return Err(HotkeyError::Empty);
    }
    Ok(Chord::new(keys))
}

// ---------------------------------------------------------------------------
// parse_key
// ---------------------------------------------------------------------------

/// Parse a single key name into an [`rdev::Key`].
///
/// Names are case-insensitive.  Modifiers resolve to their left-hand
/// variant, which is the form [`KeyNormalizer::Canonical`] produces.
///
/// Returns `None` for unrecognised names.
///
/// ```
/// use human_typer::hotkey::parse_key;
///
/// assert_eq!(parse_key("Cmd"),   Some(rdev::Key::MetaLeft));
/// assert_eq!(parse_key("ctrl"),  Some(rdev::Key::ControlLeft));
/// assert_eq!(parse_key("h"),     Some(rdev::Key::KeyH));
/// assert_eq!(parse_key("xyz"),   None);
/// ```
pub fn parse_key(key_str: &str) -> Option<Key> {
    let lower = key_str.to_ascii_lowercase();
    let key = match lower.as_str() {
        // Modifiers
        "meta" | "cmd" | "command" | "super" | "win" | "windows" => Key::MetaLeft,
        "ctrl" | "control" => Key::ControlLeft,
        "shift" => Key::ShiftLeft,
        "alt" | "option" | "opt" => Key::Alt,

        // Function keys
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,

        // Navigation / control
        "escape" | "esc" => Key::Escape,
        "space" => Key::Space,
        "return" | "enter" => Key::Return,
        "tab" => Key::Tab,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "insert" | "ins" => Key::Insert,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "up" | "uparrow" => Key::UpArrow,
        "down" | "downarrow" => Key::DownArrow,
        "left" | "leftarrow" => Key::LeftArrow,
        "right" | "rightarrow" => Key::RightArrow,

        // Digit row
        "0" => Key::Num0,
        "1" => Key::Num1,
        "2" => Key::Num2,
        "3" => Key::Num3,
        "4" => Key::Num4,
        "5" => Key::Num5,
        "6" => Key::Num6,
        "7" => Key::Num7,
        "8" => Key::Num8,
        "9" => Key::Num9,

        // Letters
        "a" => Key::KeyA,
        "b" => Key::KeyB,
        "c" => Key::KeyC,
        "d" => Key::KeyD,
        "e" => Key::KeyE,
        "f" => Key::KeyF,
        "g" => Key::KeyG,
        "h" => Key::KeyH,
        "i" => Key::KeyI,
        "j" => Key::KeyJ,
        "k" => Key::KeyK,
        "l" => Key::KeyL,
        "m" => Key::KeyM,
        "n" => Key::KeyN,
        "o" => Key::KeyO,
        "p" => Key::KeyP,
        "q" => Key::KeyQ,
        "r" => Key::KeyR,
        "s" => Key::KeyS,
        "t" => Key::KeyT,
        "u" => Key::KeyU,
        "v" => Key::KeyV,
        "w" => Key::KeyW,
        "x" => Key::KeyX,
        "y" => Key::KeyY,
        "z" => Key::KeyZ,

        _ => return None,
    };
    Some(key)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modifier_aliases() {
        for name in ["Meta", "cmd", "COMMAND", "Super", "win"] {
            assert_eq!(parse_key(name), Some(Key::MetaLeft), "{name}");
        }
        assert_eq!(parse_key("Ctrl"), Some(Key::ControlLeft));
        assert_eq!(parse_key("Control"), Some(Key::ControlLeft));
        assert_eq!(parse_key("Shift"), Some(Key::ShiftLeft));
        assert_eq!(parse_key("Option"), Some(Key::Alt));
    }

    #[test]
    fn parse_letter_keys_case_insensitive() {
        assert_eq!(parse_key("H"), Some(Key::KeyH));
        assert_eq!(parse_key("h"), Some(Key::KeyH));
        assert_eq!(parse_key("z"), Some(Key::KeyZ));
    }

    #[test]
    fn parse_function_and_named_keys() {
        assert_eq!(parse_key("F9"), Some(Key::F9));
        assert_eq!(parse_key("esc"), Some(Key::Escape));
        assert_eq!(parse_key("Enter"), Some(Key::Return));
        assert_eq!(parse_key("7"), Some(Key::Num7));
    }

    #[test]
    fn parse_unknown_key_returns_none() {
        assert_eq!(parse_key("xyz"), None);
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("Ctrl+V"), None);
    }

    #[test]
    fn parse_default_chord() {
        let chord = parse_chord("Meta+H").expect("chord");
        assert_eq!(chord.keys(), &[Key::MetaLeft, Key::KeyH]);
    }

    #[test]
    fn parse_chord_tolerates_spacing_and_duplicates() {
        let chord = parse_chord(" ctrl + shift + v + Ctrl ").expect("chord");
        assert_eq!(chord.keys(), &[Key::ControlLeft, Key::ShiftLeft, Key::KeyV]);
    }

    #[test]
    fn parse_chord_errors() {
        assert_eq!(parse_chord(""), Err(HotkeyError::Empty));
        assert_eq!(parse_chord(" + "), Err(HotkeyError::Empty));
        assert_eq!(
            parse_chord("Meta+Hyper"),
            Err(HotkeyError::UnknownKey("Hyper".into()))
        );
    }
}
