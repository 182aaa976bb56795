//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and moved onto the
//! listener thread.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// TypingConfig
// ---------------------------------------------------------------------------

/// Parameters of the keystroke delay model.
///
/// All durations are in seconds.  Values are used as given; nothing here is
/// range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Lower bound of the base per-keystroke delay.
    pub min_keystroke_delay: f64,
    /// Upper bound of the base per-keystroke delay.
    pub max_keystroke_delay: f64,
    /// Probability (0.0 – 1.0) of an extra "thinking" pause after a keystroke.
    pub pause_chance: f64,
    /// Lower bound of a thinking pause.
    pub pause_min: f64,
    /// Upper bound of a thinking pause.
    pub pause_max: f64,
    /// Fixed extra delay after a word-boundary character.
    pub word_boundary_delay: f64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            min_keystroke_delay: 0.05,
            max_keystroke_delay: 0.15,
            pause_chance: 0.1,
            pause_min: 0.3,
            pause_max: 0.8,
            word_boundary_delay: 0.1,
        }
    }
}

// ---------------------------------------------------------------------------
// HotkeyConfig
// ---------------------------------------------------------------------------

/// Global hotkey binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Key chord that starts typing the clipboard (e.g. `"Meta+H"`).
    pub chord: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            chord: "Meta+H".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use human_typer::config::AppConfig;
///
/// // Load (returns Default when file is missing), then layer the environment
/// let mut config = AppConfig::load().unwrap();
/// config.apply_env();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay model parameters.
    pub typing: TypingConfig,
    /// Global hotkey binding.
    pub hotkey: HotkeyConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// so callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns `true` when no `settings.toml` file exists yet.
    pub fn is_first_run() -> bool {
        !AppPaths::new().settings_file.exists()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
