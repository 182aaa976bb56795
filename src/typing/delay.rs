//! Randomized per-keystroke delay model.
//!
//! Draws come from `rand::thread_rng()` (OS-seeded, never fixed), so the
//! cadence differs on every run.  [`DelayModel::delay_with`] accepts any
//! [`Rng`] for callers that need a seeded source.

use std::time::Duration;

use rand::Rng;

use crate::config::TypingConfig;

/// Characters after which the word-boundary delay is added.
pub const WORD_BOUNDARIES: [char; 9] = [' ', '.', ',', '!', '?', ';', ':', '\n', '\t'];

/// Returns `true` if `c` separates words.
#[inline]
pub fn is_word_boundary(c: char) -> bool {
    WORD_BOUNDARIES.contains(&c)
}

/// Convert a delay in seconds to a [`Duration`].
///
/// Negative and NaN values become zero; values too large for a `Duration`
/// saturate at [`Duration::MAX`].
pub fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

// ---------------------------------------------------------------------------
// DelayModel
// ---------------------------------------------------------------------------

/// Computes the randomized pause that follows each typed character.
#[derive(Debug, Clone)]
pub struct DelayModel {
    config: TypingConfig,
}

impl DelayModel {
    pub fn new(config: TypingConfig) -> Self {
        Self { config }
    }

    /// Delay in seconds after typing `c`, using the thread-local RNG.
    pub fn delay(&self, c: char) -> f64 {
        self.delay_with(c, &mut rand::thread_rng())
    }

    /// Delay in seconds after typing `c`, drawing from `rng`.
    pub fn delay_with<R: Rng + ?Sized>(&self, c: char, rng: &mut R) -> f64 {
        let cfg = &self.config;

        let mut delay = uniform(rng, cfg.min_keystroke_delay, cfg.max_keystroke_delay);

        if is_word_boundary(c) {
            delay += cfg.word_boundary_delay;
        }

        // One Bernoulli trial per character.
        if rng.gen::<f64>() < cfg.pause_chance {
            delay += uniform(rng, cfg.pause_min, cfg.pause_max);
        }

        delay
    }

    /// [`delay`](Self::delay) as a sleepable [`Duration`].
    pub fn duration(&self, c: char) -> Duration {
        secs_to_duration(self.delay(c))
    }
}

/// Uniform draw between `a` and `b`.
///
/// Unlike `gen_range` this tolerates `a > b` (the interval is simply
/// reversed) and `a == b`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    a + (b - a) * rng.gen::<f64>()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
