//! Property-based tests for command parsing and dispatch

use cvterm::interpreter::{CommandTable, Dispatch, Interpreter, ParsedCommand};
use proptest::prelude::*;

/// Randomly re-case an ASCII word
fn recase(word: &str, mask: &[bool]) -> String {
    word.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn test_parse_doesnt_panic(s in "\\PC*") {
        let _ = ParsedCommand::parse(&s);
    }

    #[test]
    fn test_blank_input_parses_to_none(s in "[ \\t]{0,20}") {
        prop_assert!(ParsedCommand::parse(&s).is_none());
    }

    #[test]
    fn test_name_is_lowercase_args_untouched(
        name in "[A-Za-z]{1,12}",
        args in prop::collection::vec("[A-Za-z0-9/]{1,10}", 0..5),
        gap in "[ \\t]{1,4}",
    ) {
        let line = format!("{}{}{}", name, gap, args.join(gap.as_str()));
        let parsed = ParsedCommand::parse(&line).unwrap();
        prop_assert_eq!(parsed.name, name.to_lowercase());
        prop_assert_eq!(parsed.args, args);
    }

    #[test]
    fn test_known_commands_ignore_case(
        index in 0usize..16,
        mask in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let table = CommandTable::builtin();
        let name = table.names().nth(index).unwrap();
        let typed = recase(name, &mask);

        let mut mixed = Interpreter::new();
        let mut lower = Interpreter::new();
        prop_assert_eq!(mixed.execute(&typed), Dispatch::Executed(name.to_string()));
        lower.execute(name);
        prop_assert_eq!(mixed.output().texts(), lower.output().texts());
    }

    #[test]
    fn test_unknown_commands_report_exact_message(name in "x[a-z]{3,10}") {
        let mut term = Interpreter::new();
        prop_assume!(!term.commands().contains(&name));

        let expected = format!("Command not found: {}. Type 'help' for list.", name);
        prop_assert_eq!(term.execute(&name), Dispatch::NotFound(name.clone()));
        prop_assert_eq!(term.output().texts(), vec![expected.as_str()]);
        prop_assert_eq!(term.session().history.len(), 1);
    }
}
