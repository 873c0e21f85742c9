//! Session command history with up/down recall
//!
//! History lives only as long as the interpreter session. The cursor ranges
//! over `0..=len`, where `len` stands for the blank entry after the newest
//! command.

/// In-memory command history with a recall cursor
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    /// Submitted command lines, oldest first
    entries: Vec<String>,
    /// Recall position, always within `0..=entries.len()`
    cursor: usize,
}

impl CommandHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command and reset the cursor past the end.
    ///
    /// Blank lines are ignored. Duplicates are kept: every submission counts.
    pub fn push(&mut self, command: impl Into<String>) {
        let command = command.into();
        if command.trim().is_empty() {
            return;
        }
        self.entries.push(command);
        self.cursor = self.entries.len();
    }

    /// Step towards older entries.
    ///
    /// Returns the entry to place in the input field, or `None` when the
    /// cursor is already at the oldest entry.
    pub fn recall_older(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step towards newer entries.
    ///
    /// Returns `Some("")` once the cursor moves back onto the blank slot and
    /// `None` when it is already there.
    pub fn recall_newer(&mut self) -> Option<&str> {
        if self.cursor >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries.get(self.cursor).map(String::as_str).unwrap_or(""))
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent command, if any
    pub fn last_command(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}
