//! Integration Tests for Command Flows
//!
//! These tests drive the interpreter the way the window does: one submitted
//! line at a time, checking the scrollback and session afterwards.

use cvterm::interpreter::{Dispatch, ExternalAction, Interpreter};
use cvterm::models::LineStyle;
use cvterm::ThemeMode;

fn output_texts(term: &Interpreter) -> Vec<String> {
    term.output().texts().into_iter().map(str::to_string).collect()
}

#[test]
fn test_every_submission_lands_in_history() {
    let mut term = Interpreter::new();
    let lines = ["help", "about", "nonsense", "search php", "  skills  ", "help"];

    for (i, line) in lines.iter().enumerate() {
        term.submit(line);
        let history = &term.session().history;
        assert_eq!(history.len(), i + 1);
        assert_eq!(history.cursor(), history.len());
    }
    assert_eq!(term.session().history.entries()[4], "skills");
}

#[test]
fn test_mixed_case_dispatch_matches_lowercase() {
    for name in ["HeLp", "ABOUT", "Skills", "eDuCaTiOn", "CONTACT", "Basic"] {
        let mut mixed = Interpreter::new();
        let mut lower = Interpreter::new();

        let dispatch = mixed.execute(name);
        lower.execute(&name.to_lowercase());

        assert_eq!(dispatch, Dispatch::Executed(name.to_lowercase()));
        assert_eq!(output_texts(&mixed), output_texts(&lower));
    }
}

#[test]
fn test_unknown_command_message() {
    let mut term = Interpreter::new();
    assert_eq!(term.execute("sudo rm -rf /"), Dispatch::NotFound("sudo".to_string()));

    let lines = term.output().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "Command not found: sudo. Type 'help' for list.");
    assert_eq!(lines[0].style, LineStyle::Error);
    assert_eq!(term.session().history.entries(), &["sudo rm -rf /".to_string()]);
}

#[test]
fn test_unknown_command_name_is_lowercased() {
    let mut term = Interpreter::new();
    term.execute("FooBar");
    assert_eq!(
        output_texts(&term),
        vec!["Command not found: foobar. Type 'help' for list."]
    );
}

#[test]
fn test_autoclear_leaves_only_latest_output() {
    let mut term = Interpreter::new();
    term.greet();
    term.submit("help");
    term.submit("autoclear on");
    term.submit("basic");

    let mut expected = Interpreter::new();
    expected.execute("basic");
    assert_eq!(output_texts(&term), output_texts(&expected));
}

#[test]
fn test_clear_is_exempt_from_autoclear() {
    let mut term = Interpreter::new();
    term.execute("settings autoclear on");
    term.execute("clear");
    assert!(term.output().is_empty());

    // Unknown commands are reported before auto-clear would run.
    term.execute("about");
    term.execute("nope");
    let texts = output_texts(&term);
    assert_eq!(
        texts.last().map(String::as_str),
        Some("Command not found: nope. Type 'help' for list.")
    );
    assert!(texts.len() > 1);
}

#[test]
fn test_autoclear_off_keeps_scrollback() {
    let mut term = Interpreter::new();
    term.execute("autoclear on");
    term.execute("autoclear off");
    term.execute("ascii");
    term.execute("ascii");
    assert_eq!(term.output().len(), 1 + 12);
}

#[test]
fn test_open_and_download_cv_are_equivalent() {
    let mut open = Interpreter::new();
    let mut download = Interpreter::new();
    open.execute("open cv");
    download.execute("download cv");

    let opened = open.drain_actions();
    assert_eq!(opened, download.drain_actions());
    assert_eq!(
        opened,
        vec![ExternalAction::Download("CV-Claudiu-Morogan.pdf".to_string())]
    );
    assert_eq!(output_texts(&open), output_texts(&download));
}

#[test]
fn test_open_unknown_target() {
    let mut term = Interpreter::new();
    term.execute("open unknown");
    assert_eq!(output_texts(&term), vec!["Unknown target: unknown"]);
    assert!(term.drain_actions().is_empty());
}

#[test]
fn test_open_links() {
    let mut term = Interpreter::new();
    term.execute("open linkedin");
    term.execute("open github");
    let targets: Vec<String> = term
        .drain_actions()
        .iter()
        .map(|a| a.target().to_string())
        .collect();
    assert_eq!(targets.len(), 2);
    assert!(targets[0].contains("linkedin.com"));
    assert!(targets[1].contains("github.com"));
}

#[test]
fn test_theme_command_toggles_without_output() {
    let mut term = Interpreter::new();
    assert_eq!(term.theme(), ThemeMode::Dark);
    term.execute("theme");
    assert_eq!(term.theme(), ThemeMode::Light);
    term.execute("THEME");
    assert_eq!(term.theme(), ThemeMode::Dark);
    assert!(term.output().is_empty());
}

#[test]
fn test_search_joins_multiword_keyword() {
    let mut term = Interpreter::new();
    term.execute("search oracle apex");
    let text = output_texts(&term).join("\n");
    assert!(text.to_lowercase().contains("oracle apex"));
}

#[test]
fn test_settings_round_trip() {
    let mut term = Interpreter::new();
    term.execute("settings");
    term.execute("settings autoclear off");
    term.execute("settings");
    assert_eq!(
        output_texts(&term),
        vec!["autoClear = false", "autoClear disabled", "autoClear = false"]
    );
}

#[test]
fn test_history_recall_after_session() {
    let mut term = Interpreter::new();
    for line in ["help", "about", "skills"] {
        term.submit(line);
    }
    assert_eq!(term.history_up().as_deref(), Some("skills"));
    assert_eq!(term.history_up().as_deref(), Some("about"));
    assert_eq!(term.history_up().as_deref(), Some("help"));
    assert_eq!(term.history_up(), None);
    assert_eq!(term.session().history.cursor(), 0);
}
