//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Largest accepted [`Settings::strike_extension`], in terminal cells.
const MAX_STRIKE_EXTENSION: f64 = 100.0;

/// Presentation and logging settings.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Delay before a new status line fades in.
    fade_in_ms: u64,

    /// Delay before the strike-through line becomes visible.
    strike_reveal_ms: u64,

    /// How far (in terminal cells) the strike-through overshoots the
    /// outer cell centres, split between both ends.
    strike_extension: f64,

    /// Animation tick of the event loop.
    tick_ms: u64,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    log_filter: String,

    /// Log destination while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fade_in_ms: 300,
            strike_reveal_ms: 50,
            strike_extension: 4.0,
            tick_ms: 50,
            log_filter: "info".to_string(),
            log_file: PathBuf::from("scratch_tictactoe.log"),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;
        let settings = Self::from_toml(&content)?;
        info!("Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the log destination.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// [`Settings::fade_in_ms`] as a duration.
    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    /// [`Settings::strike_reveal_ms`] as a duration.
    pub fn strike_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.strike_reveal_ms)
    }

    /// [`Settings::tick_ms`] as a duration.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be greater than zero".to_string()));
        }
        if !(0.0..=MAX_STRIKE_EXTENSION).contains(&self.strike_extension) {
            return Err(ConfigError::new(format!(
                "strike_extension must be between 0 and {}, got {}",
                MAX_STRIKE_EXTENSION, self.strike_extension
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
