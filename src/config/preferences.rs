//! Persisted user preferences
//!
//! Two independent string preferences survive restarts: the language code
//! and the theme name. They are stored as a flat TOML table under fixed keys.
//! Interpreter session state (history, auto-clear) is never stored here.

use super::theme::ThemeMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage key for the language code
pub const LANGUAGE_KEY: &str = "cv_language";
/// Storage key for the theme name
pub const THEME_KEY: &str = "cv_theme";

/// Languages the CV content is published in
pub const AVAILABLE_LANGUAGES: &[&str] = &["en", "ro"];
/// Language used when nothing valid is stored
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(rename = "cv_language", default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(rename = "cv_theme", default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Key-value preference store backed by a TOML file
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: StoredPreferences,
}

impl PreferenceStore {
    /// Open the store at the default location, starting empty if the file is missing
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path())
    }

    /// Open the store at a custom path
    pub fn open(path: PathBuf) -> Result<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| Error::PreferencesFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            toml::from_str(&content).map_err(|e| Error::PreferencesFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?
        } else {
            StoredPreferences::default()
        };
        Ok(Self { path, values })
    }

    /// A store that is never written to disk
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            values: StoredPreferences::default(),
        }
    }

    /// Default file location: `<config dir>/cvterm/preferences.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cvterm")
            .join("preferences.toml")
    }

    /// Stored language, if it is one of the available ones
    pub fn language(&self) -> Option<&str> {
        self.values
            .language
            .as_deref()
            .filter(|lang| AVAILABLE_LANGUAGES.contains(lang))
    }

    /// Stored language or the default
    pub fn language_or_default(&self) -> &str {
        self.language().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Store a language code; unknown codes are rejected
    pub fn set_language(&mut self, language: &str) -> Result<()> {
        let language = language.trim().to_lowercase();
        if !AVAILABLE_LANGUAGES.contains(&language.as_str()) {
            return Err(Error::InvalidArgument {
                argument: language,
                reason: format!("expected one of {}", AVAILABLE_LANGUAGES.join(", ")),
            });
        }
        self.values.language = Some(language);
        self.save()
    }

    /// Stored theme; unreadable values are treated as unset
    pub fn theme(&self) -> Option<ThemeMode> {
        self.values
            .theme
            .as_deref()
            .and_then(|name| name.parse().ok())
    }

    /// Store the theme name
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<()> {
        self.values.theme = Some(theme.as_str().to_string());
        self.save()
    }

    /// Backing file path (empty for in-memory stores)
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values).map_err(|e| Error::PreferencesFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&self.path, content).map_err(|e| Error::PreferencesFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}
