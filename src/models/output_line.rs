//! Output Line Model
//!
//! Represents a single line of the terminal transcript together with the
//! style it is drawn in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Visual style of a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Regular command output
    #[default]
    Normal,
    /// Usage errors, unknown commands and handler failures
    Error,
    /// Echo of a submitted command, drawn after the prompt prefix
    Prompt,
}

impl LineStyle {
    /// CSS-style class name used when the transcript is exported
    pub fn class_name(&self) -> &'static str {
        match self {
            LineStyle::Normal => "line",
            LineStyle::Error => "line error",
            LineStyle::Prompt => "line prompt",
        }
    }
}

/// Represents a single line of transcript output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputLine {
    /// The literal text content (never includes the prompt prefix)
    pub text: String,

    /// Style tag
    pub style: LineStyle,

    /// When this line was appended
    pub timestamp: DateTime<Utc>,
}

impl OutputLine {
    /// Create a new line with the given style
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
            timestamp: Utc::now(),
        }
    }

    /// Create a plain output line
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Normal)
    }

    /// Create an error-styled line
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Error)
    }

    /// Create a prompt echo line
    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(text, LineStyle::Prompt)
    }

    /// Whether this line is error-styled
    pub fn is_error(&self) -> bool {
        self.style == LineStyle::Error
    }

    /// Text as shown to the user, with the prompt prefix for echoed commands
    pub fn display_text<'a>(&'a self, prompt_prefix: &str) -> Cow<'a, str> {
        match self.style {
            LineStyle::Prompt => Cow::Owned(format!("{}{}", prompt_prefix, self.text)),
            _ => Cow::Borrowed(&self.text),
        }
    }
}

impl Default for OutputLine {
    fn default() -> Self {
        Self::plain(String::new())
    }
}

impl From<String> for OutputLine {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<&str> for OutputLine {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}
