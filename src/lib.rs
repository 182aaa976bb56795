//! Human-like typing of clipboard contents, triggered by a global hotkey.
//!
//! * [`config`]: delay parameters and hotkey chord (TOML + environment).
//! * [`typing`]: the randomized per-keystroke delay model.
//! * [`inject`]: clipboard reader, keystroke sink and [`inject::TextInjector`].
//! * [`hotkey`]: key normalization, chord matching and the `rdev` listener.

pub mod config;
pub mod hotkey;
pub mod inject;
pub mod typing;
