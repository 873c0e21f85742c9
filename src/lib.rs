//! cvterm - an interactive terminal-style CV
//!
//! A small command interpreter over a fixed CV dataset, hosted in an egui
//! window that looks like a terminal, with a falling-character backdrop.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`interpreter`] - Tokenizing, dispatch, the built-in commands and search
//! - [`dataset`] - CV content and its plain-text rendering
//! - [`history`] - Command history with a navigation cursor
//! - [`output`] - The output sink abstraction, scrollback and transcripts
//! - [`models`] - Output lines and session state
//! - [`config`] - Configuration loading, theme palettes, stored preferences
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### Hosts
//!
//! - [`ui`] - The eframe window
//! - [`headless`] - Stdin/stdout sessions
//! - [`rain`] - Backdrop animation state
//!
//! ## Quick Start
//!
//! ```
//! use cvterm::Interpreter;
//!
//! let mut term = Interpreter::new();
//! term.submit("skills");
//! term.submit("search docker");
//! assert!(term.output().texts().iter().any(|l| l.contains("Docker")));
//! ```

#[macro_use]
extern crate tracing;

pub mod config;
pub mod dataset;
pub mod error;
pub mod headless;
pub mod history;
pub mod interpreter;
pub mod models;
pub mod output;
pub mod rain;
pub mod ui;

// Re-exports for core functionality
pub use config::loader::ConfigLoader;
pub use config::preferences::PreferenceStore;
pub use config::{Config, ThemeMode};
pub use dataset::CvDataset;
pub use error::{Error, Result};
pub use interpreter::{Dispatch, ExternalAction, Interpreter};
pub use output::{OutputSink, ScrollbackBuffer, TranscriptFormat, WriterSink};

/// The current version of cvterm from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration from the default locations, falling back to defaults
///
/// A broken config file is logged and ignored rather than stopping the
/// program; use [`ConfigLoader::load_from_file`] to surface the error.
pub fn init() -> Config {
    info!("Initializing {} v{}", NAME, VERSION);
    let mut loader = ConfigLoader::new();
    match loader.load_with_options(Default::default()) {
        Ok(config) => {
            if let Some(path) = loader.current_path() {
                info!("Configuration loaded from: {}", path.display());
            }
            config
        }
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    }
}

/// Load configuration from a specific file, falling back to defaults
pub fn init_with_config(path: &std::path::Path) -> Config {
    info!("Initializing {} v{} with {}", NAME, VERSION, path.display());
    match ConfigLoader::load_from_file(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config from {}: {}. Using defaults", path.display(), e);
            Config::default()
        }
    }
}
