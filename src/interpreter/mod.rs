//! Terminal command interpreter
//!
//! The interpreter owns the session state, the output sink and the command
//! table. A submitted line is echoed, tokenized, recorded in history and
//! dispatched. Every failure is turned into a transcript line, so one bad
//! command never ends the session.
//!
//! ```
//! use cvterm::interpreter::Interpreter;
//!
//! let mut term = Interpreter::new();
//! term.submit("HeLp");
//! assert_eq!(term.output().texts()[1], "Available commands:");
//! ```

pub mod commands;
pub mod parser;
pub mod search;

pub use commands::{CommandContext, CommandTable, Handler};
pub use parser::ParsedCommand;

use std::path::Path;

use crate::config::{Config, ThemeMode};
use crate::dataset::CvDataset;
use crate::models::{OutputLine, SessionState};
use crate::output::{OutputSink, ScrollbackBuffer};

/// Greeting printed under the banner
pub const WELCOME_MESSAGE: &str =
    "Welcome to the interactive terminal CV. Type \"help\" to list commands.";

/// Something outside the transcript the host should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAction {
    /// Open a web page
    OpenUrl(String),
    /// Open a document for download
    Download(String),
}

impl ExternalAction {
    /// URL or path the action points at
    pub fn target(&self) -> &str {
        match self {
            ExternalAction::OpenUrl(url) => url,
            ExternalAction::Download(path) => path,
        }
    }
}

/// How a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank input, nothing happened
    Empty,
    /// The handler ran to completion
    Executed(String),
    /// No such command
    NotFound(String),
    /// The handler returned an error
    Failed(String),
}

/// Line-oriented command interpreter
pub struct Interpreter<S: OutputSink = ScrollbackBuffer> {
    session: SessionState,
    output: S,
    dataset: CvDataset,
    commands: CommandTable,
    pending_actions: Vec<ExternalAction>,
}

impl Interpreter<ScrollbackBuffer> {
    /// Interpreter over the built-in CV with an unbounded scrollback
    pub fn new() -> Self {
        Self::with_parts(
            ScrollbackBuffer::new(),
            CvDataset::builtin().clone(),
            CommandTable::builtin(),
            ThemeMode::default(),
        )
    }
}

impl Default for Interpreter<ScrollbackBuffer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OutputSink> Interpreter<S> {
    /// Assemble an interpreter from its collaborators
    pub fn with_parts(output: S, dataset: CvDataset, commands: CommandTable, theme: ThemeMode) -> Self {
        let session = SessionState::new(theme);
        info!(
            "Interpreter session {} started with {} commands",
            session.id,
            commands.len()
        );
        Self {
            session,
            output,
            dataset,
            commands,
            pending_actions: Vec::new(),
        }
    }

    /// Build the interpreter a host runs: dataset for `language`, theme from
    /// the caller (usually a stored preference), greeting if configured
    pub fn from_config(output: S, config: &Config, language: &str, theme: ThemeMode) -> Self {
        let dataset = CvDataset::load_for_language(config.dataset_path.as_deref(), language);
        let mut interpreter = Self::with_parts(output, dataset, CommandTable::builtin(), theme);
        if config.terminal.show_banner {
            interpreter.greet();
        }
        interpreter
    }

    /// Print the banner and the greeting
    pub fn greet(&mut self) {
        self.output.print_block(&self.dataset.ascii);
        self.output.print(WELCOME_MESSAGE);
    }

    /// Echo a line after the prompt, then execute it
    pub fn submit(&mut self, raw: &str) -> Dispatch {
        self.output.emit(OutputLine::prompt(raw));
        self.execute(raw)
    }

    /// Execute a line without echoing it
    pub fn execute(&mut self, raw: &str) -> Dispatch {
        let Some(parsed) = ParsedCommand::parse(raw) else {
            return Dispatch::Empty;
        };
        self.session.history.push(raw.trim());

        let Some(handler) = self.commands.get(&parsed.name) else {
            warn!("Unknown command '{}'", parsed.name);
            self.output.print_error(&format!(
                "Command not found: {}. Type 'help' for list.",
                parsed.name
            ));
            return Dispatch::NotFound(parsed.name);
        };

        if self.session.auto_clear && parsed.name != commands::CLEAR_COMMAND {
            self.output.clear();
        }

        debug!("Dispatching '{}' with {} arg(s)", parsed.name, parsed.args.len());
        let result = {
            let mut ctx = CommandContext {
                session: &mut self.session,
                output: &mut self.output,
                dataset: &self.dataset,
                actions: &mut self.pending_actions,
            };
            handler(&mut ctx, &parsed.args)
        };

        match result {
            Ok(()) => Dispatch::Executed(parsed.name),
            Err(e) => {
                warn!("Command '{}' failed: {}", parsed.name, e);
                self.output.print_error(&format!("Command error: {}", e));
                Dispatch::Failed(parsed.name)
            }
        }
    }

    /// Keyboard shortcut equivalent of `clear`; not recorded in history
    pub fn clear_screen(&mut self) {
        self.output.clear();
    }

    /// Previous history entry for the input field, if the cursor can move
    pub fn history_up(&mut self) -> Option<String> {
        self.session.history.recall_older().map(str::to_string)
    }

    /// Next history entry for the input field; empty once past the newest
    pub fn history_down(&mut self) -> Option<String> {
        self.session.history.recall_newer().map(str::to_string)
    }

    /// Flip auto-clear from outside the command line and report it
    pub fn toggle_auto_clear(&mut self) -> bool {
        self.session.auto_clear = !self.session.auto_clear;
        self.output
            .print(&format!("autoClear -> {}", self.session.auto_clear));
        self.session.auto_clear
    }

    /// Flip the theme from outside the command line, e.g. a toolbar button
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.session.theme = self.session.theme.toggled();
        self.session.theme
    }

    /// Switch the CV language and report it; the dataset is reloaded from
    /// `template`, or stays the built-in CV when there is none
    pub fn switch_language(&mut self, template: Option<&Path>, language: &str) {
        info!("Switching CV language to {}", language);
        self.dataset = CvDataset::load_for_language(template, language);
        match template {
            Some(_) => self.output.print(&format!("Language: {}", language)),
            None => self.output.print(&format!(
                "Language: {} (no localized dataset configured)",
                language
            )),
        }
    }

    /// Take the external actions queued since the last call
    pub fn drain_actions(&mut self) -> Vec<ExternalAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Session id, history, auto-clear flag and theme
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Current theme
    pub fn theme(&self) -> ThemeMode {
        self.session.theme
    }

    /// Whether commands other than `clear` wipe the transcript first
    pub fn auto_clear(&self) -> bool {
        self.session.auto_clear
    }

    /// The sink everything is written to
    pub fn output(&self) -> &S {
        &self.output
    }

    /// Mutable sink access for hosts, e.g. to consume a scroll request
    pub fn output_mut(&mut self) -> &mut S {
        &mut self.output
    }

    /// The CV currently rendered by the section commands
    pub fn dataset(&self) -> &CvDataset {
        &self.dataset
    }

    /// Registered commands, including any added with `with_parts`
    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Give back the sink, e.g. to read a writer-backed transcript
    pub fn into_output(self) -> S {
        self.output
    }
}
