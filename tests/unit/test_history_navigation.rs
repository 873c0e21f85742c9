//! Unit tests for history recall

use cvterm::history::CommandHistory;

fn history_of(commands: &[&str]) -> CommandHistory {
    let mut history = CommandHistory::new();
    for command in commands {
        history.push(*command);
    }
    history
}

#[test]
fn test_up_three_times_walks_back() {
    let mut history = history_of(&["help", "about", "skills"]);
    assert_eq!(history.cursor(), 3);

    assert_eq!(history.recall_older(), Some("skills"));
    assert_eq!(history.recall_older(), Some("about"));
    assert_eq!(history.recall_older(), Some("help"));
    assert_eq!(history.cursor(), 0);

    assert_eq!(history.recall_older(), None);
    assert_eq!(history.cursor(), 0);
}

#[test]
fn test_down_returns_to_blank_field() {
    let mut history = history_of(&["help", "about"]);
    history.recall_older();
    history.recall_older();

    assert_eq!(history.recall_newer(), Some("about"));
    assert_eq!(history.recall_newer(), Some(""));
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.recall_newer(), None);
}

#[test]
fn test_new_command_resets_cursor() {
    let mut history = history_of(&["help", "about", "skills"]);
    history.recall_older();
    history.recall_older();
    history.push("contact");

    assert_eq!(history.cursor(), 4);
    assert_eq!(history.recall_older(), Some("contact"));
}

#[test]
fn test_last_command() {
    let mut history = CommandHistory::new();
    assert_eq!(history.last_command(), None);
    history.push("basic");
    assert_eq!(history.last_command(), Some("basic"));
}
