//! What happens when the chord fires: clipboard → typing.
//!
//! [`TriggerHandler::on_trigger`] is an error boundary.  Clipboard failures,
//! keystroke failures and panics are handed to an [`ErrorReporter`] and then
//! dropped, so the listener keeps running after a bad trigger.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::inject::{ClipboardSource, InjectError, KeySink, Sleeper, TextInjector, ThreadSleeper};

// ---------------------------------------------------------------------------
// TriggerError
// ---------------------------------------------------------------------------

/// Failures caught by the trigger error boundary.
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error(transparent)]
    Inject(#[from] InjectError),

    #[error("trigger panicked: {0}")]
    Panicked(String),
}

// ---------------------------------------------------------------------------
// ErrorReporter
// ---------------------------------------------------------------------------

/// Sink for errors swallowed by the trigger handler.
pub trait ErrorReporter {
    fn report(&self, error: &TriggerError);
}

/// Logs swallowed errors at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &TriggerError) {
        log::warn!("hotkey trigger failed: {error}");
    }
}

impl<F: Fn(&TriggerError)> ErrorReporter for F {
    fn report(&self, error: &TriggerError) {
        self(error)
    }
}

// ---------------------------------------------------------------------------
// TriggerHandler
// ---------------------------------------------------------------------------

/// Reads the clipboard and types it out when the hotkey fires.
pub struct TriggerHandler<C, K, S = ThreadSleeper, R = LogReporter> {
    clipboard: C,
    injector: TextInjector<K, S>,
    reporter: R,
}

impl<C, K, S, R> TriggerHandler<C, K, S, R>
where
    C: ClipboardSource,
    K: KeySink,
    S: Sleeper,
    R: ErrorReporter,
{
    pub fn new(clipboard: C, injector: TextInjector<K, S>, reporter: R) -> Self {
        Self {
            clipboard,
            injector,
            reporter,
        }
    }

    /// Handle one chord fire.  Never fails and never panics outward.
    pub fn on_trigger(&mut self) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.type_clipboard()));
        let error = match outcome {
            Ok(Ok(typed)) => {
                log::debug!("typed {typed} chars from clipboard");
                return;
            }
            Ok(Err(e)) => TriggerError::Inject(e),
            Err(payload) => TriggerError::Panicked(panic_message(payload.as_ref())),
        };
        self.reporter.report(&error);
    }

    /// Type the clipboard text, returning how many chars were typed.
    fn type_clipboard(&mut self) -> Result<usize, InjectError> {
        let text = match self.clipboard.read_text()? {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(0),
        };
        self.injector.type_text(&text)?;
        Ok(text.chars().count())
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
