//! Transcript output
//!
//! The interpreter writes through the [`OutputSink`] capability so that it
//! never depends on a display surface. [`ScrollbackBuffer`] is the
//! in-memory sink used by the GUI and by tests; [`WriterSink`] streams lines
//! to any `io::Write` for headless runs.

use crate::models::{LineStyle, OutputLine};
use std::collections::VecDeque;
use std::io::Write;

/// Append-only line sink
pub trait OutputSink {
    /// Append a line to the end of the transcript
    fn append(&mut self, line: OutputLine);

    /// Remove every line
    fn clear(&mut self);

    /// Ask the view to show the newest line
    fn scroll_to_end(&mut self);

    /// Append a line and keep the newest line in view
    fn emit(&mut self, line: OutputLine) {
        self.append(line);
        self.scroll_to_end();
    }

    /// Print one plain line
    fn print(&mut self, text: &str) {
        self.emit(OutputLine::plain(text));
    }

    /// Print one error-styled line
    fn print_error(&mut self, text: &str) {
        self.emit(OutputLine::error(text));
    }

    /// Print a multi-line block as one plain line per `\n`-separated piece
    fn print_block(&mut self, text: &str) {
        for line in text.split('\n') {
            self.print(line);
        }
    }
}

/// Escape text for insertion into HTML markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render one line as an HTML `div`, escaping all dynamic text
pub fn line_to_html(line: &OutputLine, prompt_prefix: &str) -> String {
    match line.style {
        LineStyle::Prompt => format!(
            "<div class=\"{}\"><span class=\"cmd\">{}</span>{}</div>",
            line.style.class_name(),
            escape_html(prompt_prefix),
            escape_html(&line.text)
        ),
        _ => format!(
            "<div class=\"{}\">{}</div>",
            line.style.class_name(),
            escape_html(&line.text)
        ),
    }
}

/// In-memory scrollback
#[derive(Debug, Clone, Default)]
pub struct ScrollbackBuffer {
    lines: VecDeque<OutputLine>,
    /// Maximum number of lines kept; 0 means unbounded
    capacity: usize,
    /// Set by `scroll_to_end`, consumed by the view
    scroll_requested: bool,
}

impl ScrollbackBuffer {
    /// Unbounded buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer that drops its oldest lines beyond `capacity` (0 = unbounded)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Lines in display order, oldest first
    pub fn lines(&self) -> &VecDeque<OutputLine> {
        &self.lines
    }

    /// Line texts without prompt prefixes, mostly useful in tests
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.back()
    }

    /// Return and reset the pending scroll request
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    /// Transcript as plain text, one line per row
    pub fn to_plain_text(&self, prompt_prefix: &str) -> String {
        self.lines
            .iter()
            .map(|line| line.display_text(prompt_prefix).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Transcript as escaped HTML
    pub fn to_html(&self, prompt_prefix: &str) -> String {
        self.lines
            .iter()
            .map(|line| line_to_html(line, prompt_prefix))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputSink for ScrollbackBuffer {
    fn append(&mut self, line: OutputLine) {
        self.lines.push_back(line);
        if self.capacity > 0 {
            while self.lines.len() > self.capacity {
                self.lines.pop_front();
            }
        }
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn scroll_to_end(&mut self) {
        self.scroll_requested = true;
    }
}

/// How a [`WriterSink`] formats lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptFormat {
    PlainText,
    Html,
}

/// Streams each appended line to a writer
pub struct WriterSink<W: Write> {
    writer: W,
    format: TranscriptFormat,
    prompt_prefix: String,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: TranscriptFormat, prompt_prefix: impl Into<String>) -> Self {
        Self {
            writer,
            format,
            prompt_prefix: prompt_prefix.into(),
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn append(&mut self, line: OutputLine) {
        let rendered = match self.format {
            TranscriptFormat::PlainText => line.display_text(&self.prompt_prefix).into_owned(),
            TranscriptFormat::Html => line_to_html(&line, &self.prompt_prefix),
        };
        if let Err(e) = writeln!(self.writer, "{}", rendered) {
            warn!("Failed to write transcript line: {}", e);
        }
    }

    fn clear(&mut self) {
        // A stream cannot take lines back; mark the boundary instead.
        if self.format == TranscriptFormat::Html {
            if let Err(e) = writeln!(self.writer, "<hr class=\"clear\">") {
                warn!("Failed to write transcript line: {}", e);
            }
        }
    }

    fn scroll_to_end(&mut self) {
        if let Err(e) = self.writer.flush() {
            warn!("Failed to flush transcript: {}", e);
        }
    }
}
