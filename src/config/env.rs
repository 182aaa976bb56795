//! Environment-variable overrides layered on top of `settings.toml`.
//!
//! | Variable              | Field                          |
//! |-----------------------|--------------------------------|
//! | `MIN_KEYSTROKE_DELAY` | `typing.min_keystroke_delay`   |
//! | `MAX_KEYSTROKE_DELAY` | `typing.max_keystroke_delay`   |
//! | `PAUSE_CHANCE`        | `typing.pause_chance`          |
//! | `PAUSE_MIN`           | `typing.pause_min`             |
//! | `PAUSE_MAX`           | `typing.pause_max`             |
//! | `WORD_BOUNDARY_DELAY` | `typing.word_boundary_delay`   |
//! | `TYPER_HOTKEY`        | `hotkey.chord`                 |
//!
//! Each variable is looked up in the process environment first, then in a
//! `.env` file in the working directory.  Numeric values that do not parse as
//! `f64` are logged and ignored.

use std::collections::HashMap;
use std::path::Path;

use super::AppConfig;

/// Name of the variable that overrides the hotkey chord.
pub const HOTKEY_VAR: &str = "TYPER_HOTKEY";

impl AppConfig {
    /// Apply overrides from the process environment and `./.env`.
    pub fn apply_env(&mut self) {
        let dotenv = read_dotenv(Path::new(".env"));
        self.apply_env_from(|name| std::env::var(name).ok().or_else(|| dotenv.get(name).cloned()));
    }

    /// Apply overrides from an arbitrary lookup (used by tests so they never
    /// touch the real process environment).
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let typing = &mut self.typing;
        let numeric: [(&str, &mut f64); 6] = [
            ("MIN_KEYSTROKE_DELAY", &mut typing.min_keystroke_delay),
            ("MAX_KEYSTROKE_DELAY", &mut typing.max_keystroke_delay),
            ("PAUSE_CHANCE", &mut typing.pause_chance),
            ("PAUSE_MIN", &mut typing.pause_min),
            ("PAUSE_MAX", &mut typing.pause_max),
            ("WORD_BOUNDARY_DELAY", &mut typing.word_boundary_delay),
        ];

        for (name, slot) in numeric {
            let Some(raw) = lookup(name) else { continue };
            match raw.trim().parse::<f64>() {
                Ok(value) => *slot = value,
                Err(e) => log::warn!("ignoring {name}={raw:?}: {e}"),
            }
        }

        if let Some(chord) = lookup(HOTKEY_VAR) {
            let chord = chord.trim();
            if !chord.is_empty() {
                self.hotkey.chord = chord.to_string();
            }
        }
    }
}

/// Parse `KEY=VALUE` lines from a dotenv file.
///
/// Blank lines, `#` comments and lines without `=` are skipped; an optional
/// `export ` prefix and matching surrounding quotes are stripped.  A missing
/// or unreadable file yields an empty map.
pub fn read_dotenv(path: &Path) -> HashMap<String, String> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return HashMap::new();
    };
    parse_dotenv(&raw)
}

fn parse_dotenv(raw: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    vars
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
