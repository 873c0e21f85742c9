//! Integration Tests for Error Handling
//!
//! Bad input and failing handlers must end up as transcript lines; the
//! session keeps going afterwards.

use cvterm::dataset::CvDataset;
use cvterm::interpreter::{CommandContext, CommandTable, Dispatch, Interpreter};
use cvterm::models::LineStyle;
use cvterm::{Error, ScrollbackBuffer, ThemeMode};

fn failing(_ctx: &mut CommandContext<'_>, args: &[String]) -> cvterm::Result<()> {
    Err(Error::InvalidArgument {
        argument: args.join(" "),
        reason: "always fails".to_string(),
    })
}

fn interpreter_with_failing_command() -> Interpreter {
    Interpreter::with_parts(
        ScrollbackBuffer::new(),
        CvDataset::sample(),
        CommandTable::builtin().with("explode", failing),
        ThemeMode::Dark,
    )
}

#[test]
fn test_handler_error_becomes_error_line() {
    let mut term = interpreter_with_failing_command();
    let dispatch = term.execute("explode now");

    assert_eq!(dispatch, Dispatch::Failed("explode".to_string()));
    let line = term.output().last().unwrap();
    assert_eq!(line.style, LineStyle::Error);
    assert!(line.text.starts_with("Command error: "));
    assert!(line.text.contains("always fails"));
}

#[test]
fn test_session_survives_handler_error() {
    let mut term = interpreter_with_failing_command();
    term.execute("explode");
    term.execute("explode");

    assert_eq!(term.execute("contact"), Dispatch::Executed("contact".to_string()));
    assert_eq!(term.session().history.len(), 3);
}

#[test]
fn test_usage_errors_are_error_lines() {
    let cases = [
        ("open", "Usage: open <linkedin|github|cv>"),
        ("download", "Usage: download cv"),
        ("download resume", "Usage: download cv"),
        ("goto", "Usage: goto <about|skills|experience|education>"),
        ("search", "Usage: search <keyword>"),
        ("settings theme dark", "Unknown setting key"),
        ("settings autoclear maybe", "Usage: settings autoclear <on|off>"),
        ("autoclear sometimes", "Usage: autoclear [on|off]"),
    ];

    for (input, message) in cases {
        let mut term = Interpreter::new();
        assert_eq!(term.execute(input), Dispatch::Executed(input.split(' ').next().unwrap().to_string()));
        let lines = term.output().lines();
        assert_eq!(lines.len(), 1, "{}", input);
        assert_eq!(lines[0].text, message);
        assert_eq!(lines[0].style, LineStyle::Error, "{}", input);
    }
}

#[test]
fn test_no_match_search_is_not_an_error() {
    let mut term = Interpreter::new();
    term.execute("search zzzznotfound");
    let lines = term.output().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "No matches for 'zzzznotfound'.");
    assert_eq!(lines[0].style, LineStyle::Normal);
}

#[test]
fn test_blank_and_whitespace_input() {
    let mut term = Interpreter::new();
    for input in ["", " ", "\t", "   \t  "] {
        assert_eq!(term.execute(input), Dispatch::Empty);
    }
    assert!(term.session().history.is_empty());
    assert!(term.output().is_empty());
}

#[test]
fn test_blank_submit_still_echoes() {
    let mut term = Interpreter::new();
    assert_eq!(term.submit("   "), Dispatch::Empty);
    assert_eq!(term.output().len(), 1);
    assert_eq!(term.output().lines()[0].style, LineStyle::Prompt);
}

#[test]
fn test_broken_dataset_file_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        CvDataset::load_from_file(&path),
        Err(Error::DatasetLoadFailed { .. })
    ));
    assert_eq!(
        &CvDataset::load_for_language(Some(&path), "en"),
        CvDataset::builtin()
    );
}
