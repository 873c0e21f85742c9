//! Command line tokenizer
//!
//! A line is split on runs of whitespace. The first token names the command
//! and is matched case-insensitively; the rest are passed through verbatim.
//! There is no quoting, so an argument can never contain a space.

/// A tokenized command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercased command name
    pub name: String,
    /// Remaining tokens with their original casing
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Tokenize a raw line; `None` for empty or whitespace-only input
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let name = tokens.next()?.to_lowercase();
        let args = tokens.map(str::to_string).collect();
        Some(Self { name, args })
    }

    /// First argument, if any
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}
