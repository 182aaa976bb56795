//! Application entry point: human-typer.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Write a default `settings.toml` on first run, load [`AppConfig`], then
//!    apply environment overrides.
//! 3. Parse the hotkey chord.
//! 4. Spawn the hotkey listener thread; the clipboard reader, keyboard and
//!    delay model are built on that thread.
//! 5. Wait for Ctrl+C or for the listener to die.

use anyhow::{anyhow, Context};
use human_typer::{
    config::{AppConfig, AppPaths},
    hotkey::{parse_chord, HotkeyListener, KeyNormalizer, LogReporter, TriggerHandler},
    inject::{EnigoKeyboard, SystemClipboard, TextInjector},
    typing::DelayModel,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("human-typer starting up");

    // 2. Configuration
    if AppConfig::is_first_run() {
        match AppConfig::default().save() {
            Ok(()) => log::info!(
                "Wrote default settings to {}",
                AppPaths::new().settings_file.display()
            ),
            Err(e) => log::warn!("Could not write default settings: {e}"),
        }
    }
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    config.apply_env();
    log::debug!("typing config: {:?}", config.typing);

    // 3. Hotkey
    let chord = parse_chord(&config.hotkey.chord)
        .with_context(|| format!("invalid hotkey {:?}", config.hotkey.chord))?;
    let normalizer = KeyNormalizer::detect();
    log::info!("Press {chord} to type the clipboard ({normalizer:?} key matching); Ctrl+C to quit");

    // 4. Listener thread
    let typing = config.typing.clone();
    let mut listener = HotkeyListener::start(chord, normalizer, move || {
        let injector = TextInjector::new(EnigoKeyboard::new(), DelayModel::new(typing));
        let mut handler = TriggerHandler::new(SystemClipboard::new(), injector, LogReporter);
        move || handler.on_trigger()
    });

    // 5. Run until interrupted
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl+C")?;
            log::info!("Interrupt received; shutting down");
            Ok(())
        }
        reason = listener.closed() => {
            Err(anyhow!("hotkey listener stopped: {reason}"))
        }
    }
}
