//! Property-based tests for history bookkeeping

use cvterm::history::CommandHistory;
use cvterm::interpreter::Interpreter;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Push(String),
    Up,
    Down,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(Step::Push),
        Just(Step::Up),
        Just(Step::Down),
    ]
}

proptest! {
    #[test]
    fn test_each_line_adds_one_entry(lines in prop::collection::vec("[a-zA-Z]{1,8}( [a-z]{1,5})?", 1..30)) {
        let mut term = Interpreter::new();
        for (i, line) in lines.iter().enumerate() {
            term.submit(line);
            let history = &term.session().history;
            prop_assert_eq!(history.len(), i + 1);
            prop_assert_eq!(history.cursor(), history.len());
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds(steps in prop::collection::vec(step(), 0..60)) {
        let mut history = CommandHistory::new();
        for step in steps {
            match step {
                Step::Push(line) => history.push(line),
                Step::Up => { history.recall_older(); }
                Step::Down => { history.recall_newer(); }
            }
            prop_assert!(history.cursor() <= history.len());
        }
    }

    #[test]
    fn test_up_walks_history_in_reverse(entries in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let mut history = CommandHistory::new();
        for entry in &entries {
            history.push(entry.as_str());
        }

        let mut recalled = Vec::new();
        while let Some(entry) = history.recall_older() {
            recalled.push(entry.to_string());
        }
        recalled.reverse();
        prop_assert_eq!(recalled, entries);
        prop_assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_up_then_down_ends_blank(entries in prop::collection::vec("[a-z]{1,8}", 1..10), ups in 0usize..12) {
        let mut history = CommandHistory::new();
        for entry in &entries {
            history.push(entry.as_str());
        }
        for _ in 0..ups {
            history.recall_older();
        }
        let mut last = None;
        while let Some(entry) = history.recall_newer() {
            last = Some(entry.to_string());
        }
        if ups > 0 {
            prop_assert_eq!(last.as_deref(), Some(""));
        }
        prop_assert_eq!(history.cursor(), entries.len());
    }
}
