//! Headless session: commands from a reader, transcript to a writer
//!
//! Used for `--headless`, for scripting and for tests that want the exact
//! transcript text without a window.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use crate::config::{Config, ThemeMode};
use crate::error::Result;
use crate::interpreter::{ExternalAction, Interpreter};
use crate::output::{TranscriptFormat, WriterSink};

/// What a headless run did besides writing the transcript
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadlessSummary {
    /// Non-empty lines submitted
    pub commands: usize,
    /// Links and downloads requested, in order; nothing is opened
    pub actions: Vec<ExternalAction>,
}

/// Run every line of `input` through a fresh interpreter
pub fn run_headless<R, W>(
    config: &Config,
    language: &str,
    theme: ThemeMode,
    mut input: R,
    output: W,
    format: TranscriptFormat,
) -> Result<HeadlessSummary>
where
    R: BufRead,
    W: Write,
{
    let sink = WriterSink::new(output, format, config.terminal.prompt_prefix());
    let mut interpreter = Interpreter::from_config(sink, config, language, theme);
    let mut summary = HeadlessSummary::default();

    let mut raw = Vec::new();
    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        let line = decode_line(&raw);
        if line.trim().is_empty() {
            continue;
        }
        interpreter.submit(&line);
        summary.commands += 1;
        for action in interpreter.drain_actions() {
            info!("Headless session requested {}", action.target());
            summary.actions.push(action);
        }
    }

    let mut writer = interpreter.into_output().into_inner();
    writer.flush()?;
    debug!("Headless session ran {} command(s)", summary.commands);
    Ok(summary)
}

/// Strip the line ending; bytes that are not UTF-8 become U+FFFD
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!("Input line is not valid UTF-8, running it as {:?}", text);
            text
        }
    }
}
