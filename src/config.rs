//! Configuration for timings, filters and logging.
//!
//! Stored as pretty-printed JSON under the platform config directory. A
//! missing file yields the defaults; unknown fields are ignored so old
//! configs keep loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::highlight::HighlightFilter;

/// Tunable settings for the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Arming window for the toggle key's double press, in milliseconds.
    /// Sensible values sit between 150 and 250.
    pub toggle_window_ms: u64,
    /// Size/visibility filter applied when measuring the page
    pub highlight_filter: HighlightFilter,
    /// Default tracing filter, overridable with RUST_LOG
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toggle_window_ms: 200,
            highlight_filter: HighlightFilter::default(),
            log_filter: "keyhop=info".to_string(),
        }
    }
}

impl Config {
    /// The toggle window as a duration.
    pub fn toggle_window(&self) -> Duration {
        Duration::from_millis(self.toggle_window_ms)
    }

    /// Platform config file path, `None` when no config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keyhop").join("config.json"))
    }

    /// Load from a JSON file, falling back to defaults when missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)
            .wrap_err(format!("Failed to read config from {:?}", path))?;
        let config = serde_json::from_str(&json).wrap_err("Failed to deserialize config")?;
        Ok(config)
    }

    /// Save as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err(format!("Failed to create config directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).wrap_err("Failed to serialize config")?;
        fs::write(path, json).wrap_err(format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}
