//! Theme and Styling Configuration
//!
//! The terminal has exactly two themes. The mode is a plain flag owned by
//! the interpreter session; the palette maps it to concrete egui colors.

use crate::error::{Error, Result};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-valued theme flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Name used in the preference store and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Whether this is the light theme
    pub fn is_light(&self) -> bool {
        matches!(self, ThemeMode::Light)
    }

    /// Color palette for this theme
    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Dark => Palette {
                background: egui::Color32::from_rgb(10, 14, 12),
                foreground: egui::Color32::from_rgb(200, 230, 210),
                prompt: egui::Color32::from_rgb(33, 224, 125),
                error: egui::Color32::from_rgb(255, 95, 95),
                rain_glyph: egui::Color32::from_rgb(0x21, 0xe0, 0x7d),
                input_background: egui::Color32::from_rgb(18, 24, 20),
            },
            ThemeMode::Light => Palette {
                background: egui::Color32::from_rgb(240, 240, 240),
                foreground: egui::Color32::from_rgb(30, 40, 35),
                prompt: egui::Color32::from_rgb(10, 125, 86),
                error: egui::Color32::from_rgb(190, 30, 45),
                rain_glyph: egui::Color32::from_rgb(0x0a, 0x7d, 0x56),
                input_background: egui::Color32::from_rgb(228, 232, 230),
            },
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(Error::ThemeNotFound {
                theme_name: other.to_string(),
            }),
        }
    }
}

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: egui::Color32,
    pub foreground: egui::Color32,
    /// Prompt prefix and accents
    pub prompt: egui::Color32,
    pub error: egui::Color32,
    /// Falling glyph color
    pub rain_glyph: egui::Color32,
    pub input_background: egui::Color32,
}
