//! Mapping physical keys to logical keys.
//!
//! The chord is matched on logical keys so that either Command key (or
//! either Ctrl, Shift or Alt key) completes it.

use rdev::Key;

/// How raw `rdev` keys are turned into chord-comparable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyNormalizer {
    /// Left/right modifier variants collapse to one logical key.
    Canonical,
    /// Keys are compared exactly as reported.
    Raw,
}

impl KeyNormalizer {
    /// Pick the variant for the current platform.
    ///
    /// rdev reports distinct left/right modifiers on macOS, Windows and
    /// Linux; anywhere else keys are compared raw.
    pub fn detect() -> Self {
        if cfg!(any(target_os = "macos", target_os = "windows", target_os = "linux")) {
            Self::Canonical
        } else {
            Self::Raw
        }
    }

    pub fn normalize(self, key: Key) -> Key {
        match self {
            Self::Canonical => canonical(key).unwrap_or(key),
            Self::Raw => key,
        }
    }
}

impl Default for KeyNormalizer {
    fn default() -> Self {
        Self::detect()
    }
}

/// Logical identity of `key`, or `None` when rdev could not identify it.
fn canonical(key: Key) -> Option<Key> {
    let logical = match key {
        Key::Unknown(_) => return None,
        Key::MetaRight => Key::MetaLeft,
        Key::ControlRight => Key::ControlLeft,
        Key::ShiftRight => Key::ShiftLeft,
        Key::AltGr => Key::Alt,
        other => other,
    };
    Some(logical)
}
