//! Dedicated OS-thread hotkey listener using `rdev::listen`.
//!
//! `rdev::listen` is a blocking call that must live on its own OS thread.
//! [`HotkeyListener`] owns that thread and a stop flag; dropping it sets the
//! flag so the callback silently ignores further events.
//!
//! # Shutdown caveat
//!
//! `rdev::listen` has **no graceful shutdown API**.  Setting the stop flag
//! prevents triggers from running, but the OS thread itself will remain
//! blocked in the rdev event loop until the process exits.
//!
//! If `rdev::listen` returns an error (for example when macOS accessibility
//! permission is missing) the reason is delivered to
//! [`HotkeyListener::closed`].

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::oneshot;

use super::{Chord, ChordMatcher, HotkeyDispatcher, KeyNormalizer};

// ---------------------------------------------------------------------------
// HotkeyListener
// ---------------------------------------------------------------------------

/// Handle to a running hotkey listener thread.
pub struct HotkeyListener {
    /// Shared stop flag: set `true` on [`Drop`].
    stop: Arc<AtomicBool>,
    /// Receives the reason `rdev::listen` stopped.
    exit: oneshot::Receiver<String>,
    /// Kept so the thread is not detached prematurely; never joined because
    /// `rdev::listen` does not return while it is healthy.
    _thread: std::thread::JoinHandle<()>,
}

impl HotkeyListener {
    /// Spawn the listener thread.
    ///
    /// `make_trigger` runs **on the listener thread** and builds the closure
    /// called each time `chord` fires.  Building it there lets the trigger
    /// own handles that are not `Send` (enigo, arboard).
    ///
    /// # Panics
    ///
    /// Panics if the OS refuses to create the thread.
    pub fn start<M, T>(chord: Chord, normalizer: KeyNormalizer, make_trigger: M) -> Self
    where
        M: FnOnce() -> T + Send + 'static,
        T: FnMut() + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_clone = Arc::clone(&stop);
        let (exit_tx, exit) = oneshot::channel();

        let thread = std::thread::Builder::new()
            .name("hotkey-listener".into())
            .spawn(move || {
                let mut dispatcher =
                    HotkeyDispatcher::new(normalizer, ChordMatcher::new(chord), make_trigger());

                let result = rdev::listen(move |event| {
                    // Bail out if the listener has been stopped.
                    if stop_clone.load(Ordering::Relaxed) {
                        return;
                    }
                    dispatcher.handle(&event);
                });

                let reason = match result {
                    Ok(()) => "rdev::listen returned".to_string(),
                    Err(e) => format!("{e:?}"),
                };
                log::error!("hotkey-listener: {reason}");
                let _ = exit_tx.send(reason);
            })
            .expect("failed to spawn hotkey-listener thread");

        Self {
            stop,
            exit,
            _thread: thread,
        }
    }

    /// Resolves when the listener thread stops, with the reason.
    pub async fn closed(&mut self) -> String {
        (&mut self.exit)
            .await
            .unwrap_or_else(|_| "hotkey-listener thread exited".to_string())
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
