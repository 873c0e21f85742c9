//! Configuration management for cvterm
//!
//! Configuration is plain serde data loaded by [`loader::ConfigLoader`].
//! Every section has defaults, so a config file only needs the keys it
//! wants to change.

pub mod loader;
pub mod preferences;
pub mod theme;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub use theme::{Palette, ThemeMode};

/// Main configuration structure for cvterm
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window and transcript settings
    pub ui: UiConfig,

    /// Prompt and greeting settings
    pub terminal: TerminalConfig,

    /// Falling-character backdrop
    pub rain: RainConfig,

    /// Optional CV dataset file (JSON or TOML); the built-in CV is used when unset
    pub dataset_path: Option<PathBuf>,
}

impl Config {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.terminal.user.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.user".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.terminal.user.chars().any(char::is_whitespace) {
            return Err(Error::ConfigValidationFailed {
                field: "terminal.user".to_string(),
                reason: "must not contain whitespace".to_string(),
            });
        }
        if self.ui.font_size <= 0.0 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: format!("must be positive, got {}", self.ui.font_size),
            });
        }
        if self.rain.frame_interval_ms == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "rain.frame_interval_ms".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.rain.column_width <= 0.0 {
            return Err(Error::ConfigValidationFailed {
                field: "rain.column_width".to_string(),
                reason: format!("must be positive, got {}", self.rain.column_width),
            });
        }
        if !(0.0..=1.0).contains(&self.rain.skip_probability) {
            return Err(Error::ConfigValidationFailed {
                field: "rain.skip_probability".to_string(),
                reason: format!("must be within 0..=1, got {}", self.rain.skip_probability),
            });
        }
        Ok(())
    }
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Transcript font size in points
    pub font_size: f32,

    /// Maximum number of transcript lines kept (0 keeps everything)
    pub scrollback_lines: usize,

    /// Theme used when no preference has been stored yet
    pub default_theme: ThemeMode,

    /// Initial window size
    pub window_width: f32,
    pub window_height: f32,

    /// Show the quick-command button row
    pub show_quick_menu: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            scrollback_lines: 5_000,
            default_theme: ThemeMode::Dark,
            window_width: 960.0,
            window_height: 640.0,
            show_quick_menu: true,
        }
    }
}

/// Prompt configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// User name shown in the prompt prefix
    pub user: String,

    /// Host label shown in the prompt prefix
    pub host: String,

    /// Print the banner and greeting when the session starts
    pub show_banner: bool,
}

impl TerminalConfig {
    /// Prefix drawn in front of echoed commands, e.g. `claudiu@cv:~$ `
    pub fn prompt_prefix(&self) -> String {
        format!("{}@{}:~$ ", self.user, self.host)
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "claudiu".to_string(),
            host: "cv".to_string(),
            show_banner: true,
        }
    }
}

/// Backdrop animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Draw the backdrop at all
    pub enabled: bool,

    /// Minimum time between two frames
    pub frame_interval_ms: u64,

    /// Horizontal spacing and vertical step, in points
    pub column_width: f32,

    /// Chance that a column draws nothing in a frame
    pub skip_probability: f32,
}

impl RainConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frame_interval_ms: 90,
            column_width: 14.0,
            skip_probability: 0.25,
        }
    }
}
