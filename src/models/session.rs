//! Interpreter Session Model
//!
//! Per-session interpreter state: input history, the auto-clear flag and the
//! theme flag. Created when the interpreter starts and dropped with it;
//! nothing here is persisted.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::ThemeMode;
use crate::history::CommandHistory;

/// Mutable state owned by one interpreter session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Session identifier, used in log lines
    pub id: Uuid,

    /// Submitted commands and the recall cursor
    pub history: CommandHistory,

    /// Clear the scrollback before each command's output
    pub auto_clear: bool,

    /// Current theme, read by the backdrop renderer
    pub theme: ThemeMode,

    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    /// Create a fresh session
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            history: CommandHistory::new(),
            auto_clear: false,
            theme,
            started_at: Utc::now(),
        }
    }

    /// Time since the session started
    pub fn uptime(&self) -> chrono::Duration {
        Utc::now() - self.started_at
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
