//! Chord matching over the set of currently held keys.
//!
//! [`ChordMatcher`] is a two-state machine:
//!
//! ```text
//! Armed ──last chord key pressed──▶ Fired   (press() returns true once)
//! Fired ──any chord key released──▶ Armed
//! ```
//!
//! Auto-repeat presses of a key that is already held are ignored, so holding
//! the chord down never fires twice.

use std::fmt;

use rdev::Key;

// ---------------------------------------------------------------------------
// Chord
// ---------------------------------------------------------------------------

/// The target key combination, in normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    keys: Vec<Key>,
}

impl Chord {
    /// Build a chord; duplicate keys are dropped, first occurrence wins.
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut unique: Vec<Key> = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        Self { keys: unique }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn contains(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// `true` when every chord key appears in `held`.
    pub fn is_held_in(&self, held: &[Key]) -> bool {
        self.keys.iter().all(|k| held.contains(k))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{key:?}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ChordState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChordState {
    /// Waiting for the chord to become fully held.
    #[default]
    Armed,
    /// The chord fired and has not been broken by a release yet.
    Fired,
}

// ---------------------------------------------------------------------------
// ChordMatcher
// ---------------------------------------------------------------------------

/// Tracks held keys and reports the instant the chord completes.
#[derive(Debug, Clone)]
pub struct ChordMatcher {
    chord: Chord,
    held: Vec<Key>,
    state: ChordState,
}

impl ChordMatcher {
    pub fn new(chord: Chord) -> Self {
        Self {
            chord,
            held: Vec::new(),
            state: ChordState::Armed,
        }
    }

    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    pub fn state(&self) -> ChordState {
        self.state
    }

    pub fn held(&self) -> &[Key] {
        &self.held
    }

    /// Record a key press.  Returns `true` exactly when this press completes
    /// the chord.
    pub fn press(&mut self, key: Key) -> bool {
        if self.held.contains(&key) {
            // auto-repeat
            return false;
        }
        self.held.push(key);

        if self.state == ChordState::Armed
            && self.chord.contains(key)
            && self.chord.is_held_in(&self.held)
        {
            self.state = ChordState::Fired;
            return true;
        }
        false
    }

    /// Record a key release.
    pub fn release(&mut self, key: Key) {
        self.held.retain(|k| *k != key);
        if !self.chord.is_held_in(&self.held) {
            self.state = ChordState::Armed;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
