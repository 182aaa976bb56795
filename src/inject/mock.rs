//! Test doubles for the injection collaborators.
//!
//! [`MockKeys`] and [`MockSleeper`] append to one shared [`StepLog`] so tests
//! can assert on the interleaving of keystrokes and sleeps.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use super::{ClipboardSource, InjectError, KeySink, Sleeper};

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Key(char),
    Sleep(Duration),
}

pub type StepLog = Rc<RefCell<Vec<Step>>>;

pub fn step_log() -> StepLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Records every typed character; optionally fails on one of them.
pub struct MockKeys {
    log: StepLog,
    fail_on: Option<char>,
}

impl MockKeys {
    pub fn new(log: &StepLog) -> Self {
        Self {
            log: Rc::clone(log),
            fail_on: None,
        }
    }

    pub fn failing_on(log: &StepLog, c: char) -> Self {
        Self {
            log: Rc::clone(log),
            fail_on: Some(c),
        }
    }
}

impl KeySink for MockKeys {
    fn type_char(&mut self, c: char) -> Result<(), InjectError> {
        if self.fail_on == Some(c) {
            return Err(InjectError::KeySimulation(format!("denied {c:?}")));
        }
        self.log.borrow_mut().push(Step::Key(c));
        Ok(())
    }
}

/// Records requested sleeps instead of blocking.
pub struct MockSleeper {
    log: StepLog,
}

impl MockSleeper {
    pub fn new(log: &StepLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl Sleeper for MockSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.log.borrow_mut().push(Step::Sleep(duration));
    }
}

/// Returns scripted responses in order, then `Ok(None)` forever.
#[derive(Default)]
pub struct MockClipboard {
    responses: VecDeque<Result<Option<String>, InjectError>>,
    pub reads: usize,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_text(mut self, text: &str) -> Self {
        self.responses.push_back(Ok(Some(text.to_string())));
        self
    }

    pub fn then_empty(mut self) -> Self {
        self.responses.push_back(Ok(None));
        self
    }

    pub fn then_error(mut self, message: &str) -> Self {
        self.responses
            .push_back(Err(InjectError::ClipboardAccess(message.to_string())));
        self
    }
}

impl ClipboardSource for MockClipboard {
    fn read_text(&mut self) -> Result<Option<String>, InjectError> {
        self.reads += 1;
        self.responses.pop_front().unwrap_or(Ok(None))
    }
}
