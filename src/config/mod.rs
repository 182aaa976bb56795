//! Configuration module for human-typer.
//!
//! Provides `AppConfig` (top-level settings), the typing and hotkey
//! sub-configs, `AppPaths` for the platform config directory, TOML
//! persistence via `AppConfig::load` / `AppConfig::save`, and environment
//! overrides via `AppConfig::apply_env`.

pub mod env;
pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, HotkeyConfig, TypingConfig};
