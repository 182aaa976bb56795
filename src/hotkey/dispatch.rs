//! Routes raw `rdev` events into the chord matcher and fires the trigger.
//!
//! The trigger runs synchronously, so key events that arrive while it is
//! typing are queued by the OS and delivered in a burst once it returns.
//! Chord fires inside that burst are dropped: a hotkey pressed while typing
//! is ignored rather than replayed afterwards.  The held-key set is still
//! updated from those events so releases are never lost.

use std::time::{Duration, SystemTime};

use rdev::{Event, EventType};

use super::{ChordMatcher, KeyNormalizer};

/// How long after a typing session queued events are still treated as
/// having arrived during it.
pub const QUEUE_DRAIN_WINDOW: Duration = Duration::from_millis(100);

/// Owns the listener-thread state: normalizer, matcher and trigger.
pub struct HotkeyDispatcher<F> {
    normalizer: KeyNormalizer,
    matcher: ChordMatcher,
    on_fire: F,
    busy_until: Option<SystemTime>,
}

impl<F: FnMut()> HotkeyDispatcher<F> {
    pub fn new(normalizer: KeyNormalizer, matcher: ChordMatcher, on_fire: F) -> Self {
        Self {
            normalizer,
            matcher,
            on_fire,
            busy_until: None,
        }
    }

    pub fn matcher(&self) -> &ChordMatcher {
        &self.matcher
    }

    /// Feed one OS event.  Returns `true` if the trigger ran.
    pub fn handle(&mut self, event: &Event) -> bool {
        match event.event_type {
            EventType::KeyPress(raw) => {
                let key = self.normalizer.normalize(raw);
                if !self.matcher.press(key) {
                    return false;
                }
                if self.arrived_while_busy(event.time) {
                    log::debug!("ignoring {} pressed while typing", self.matcher.chord());
                    return false;
                }

                (self.on_fire)();
                self.busy_until = Some(SystemTime::now() + QUEUE_DRAIN_WINDOW);
                true
            }
            EventType::KeyRelease(raw) => {
                let key = self.normalizer.normalize(raw);
                self.matcher.release(key);
                false
            }
            _ => false,
        }
    }

    fn arrived_while_busy(&self, time: SystemTime) -> bool {
        matches!(self.busy_until, Some(until) if time < until)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use rdev::Key;

    use super::*;
    use crate::hotkey::Chord;

    fn event_at(event_type: EventType, time: SystemTime) -> Event {
        Event {
            time,
            name: None,
            event_type,
        }
    }

    /// An event delivered well after any drain window.
    fn later(event_type: EventType) -> Event {
        event_at(event_type, SystemTime::now() + Duration::from_secs(60))
    }

    fn dispatcher(normalizer: KeyNormalizer) -> (HotkeyDispatcher<impl FnMut()>, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let matcher = ChordMatcher::new(Chord::new([Key::MetaLeft, Key::KeyH]));
        let d = HotkeyDispatcher::new(normalizer, matcher, move || counter.set(counter.get() + 1));
        (d, fired)
    }

    #[test]
    fn chord_runs_trigger() {
        let (mut d, fired) = dispatcher(KeyNormalizer::Canonical);

        d.handle(&later(EventType::KeyPress(Key::MetaLeft)));
        assert!(d.handle(&later(EventType::KeyPress(Key::KeyH))));

        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn right_meta_matches_when_canonical() {
        let (mut d, fired) = dispatcher(KeyNormalizer::Canonical);

        d.handle(&later(EventType::KeyPress(Key::MetaRight)));
        d.handle(&later(EventType::KeyPress(Key::KeyH)));

        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn right_meta_does_not_match_when_raw() {
        let (mut d, fired) = dispatcher(KeyNormalizer::Raw);

        d.handle(&later(EventType::KeyPress(Key::MetaRight)));
        d.handle(&later(EventType::KeyPress(Key::KeyH)));

        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn left_press_right_release_clears_modifier() {
        let (mut d, _) = dispatcher(KeyNormalizer::Canonical);

        d.handle(&later(EventType::KeyPress(Key::MetaLeft)));
        d.handle(&later(EventType::KeyRelease(Key::MetaRight)));

        assert!(d.matcher().held().is_empty());
    }

    #[test]
    fn non_key_events_are_ignored() {
        let (mut d, fired) = dispatcher(KeyNormalizer::Canonical);

        assert!(!d.handle(&later(EventType::MouseMove { x: 1.0, y: 2.0 })));
        assert!(!d.handle(&later(EventType::ButtonPress(rdev::Button::Left))));

        assert_eq!(fired.get(), 0);
        assert!(d.matcher().held().is_empty());
    }

    #[test]
    fn repeat_trigger_during_typing_is_ignored() {
        let (mut d, fired) = dispatcher(KeyNormalizer::Canonical);
        let start = SystemTime::now();

        d.handle(&event_at(EventType::KeyPress(Key::MetaLeft), start));
        d.handle(&event_at(EventType::KeyPress(Key::KeyH), start));
        assert_eq!(fired.get(), 1);

        // Queued burst delivered right after the typing session returns.
        let burst = SystemTime::now();
        d.handle(&event_at(EventType::KeyRelease(Key::KeyH), burst));
        assert!(!d.handle(&event_at(EventType::KeyPress(Key::KeyH), burst)));
        assert_eq!(fired.get(), 1);

        // The chord must be broken and re-pressed after the burst.
        d.handle(&later(EventType::KeyRelease(Key::KeyH)));
        d.handle(&later(EventType::KeyRelease(Key::MetaLeft)));
        assert!(d.matcher().held().is_empty());
        d.handle(&later(EventType::KeyPress(Key::MetaLeft)));
        assert!(d.handle(&later(EventType::KeyPress(Key::KeyH))));
        assert_eq!(fired.get(), 2);
    }
}
