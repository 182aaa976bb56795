//! Human typing cadence.
//!
//! [`DelayModel`] turns a character into the pause that follows it:
//!
//! ```text
//! delay = U(min_keystroke_delay, max_keystroke_delay)
//!       + word_boundary_delay          if the char is a word boundary
//!       + U(pause_min, pause_max)      with probability pause_chance
//! ```
//!
//! # Usage
//!
//! ```
//! use human_typer::config::TypingConfig;
//! use human_typer::typing::DelayModel;
//!
//! let model = DelayModel::new(TypingConfig::default());
//! let secs = model.delay('a');
//! assert!(secs >= 0.05);
//! ```

pub mod delay;

pub use delay::{is_word_boundary, secs_to_duration, DelayModel, WORD_BOUNDARIES};
