//! cvterm - an interactive terminal-style CV
//!
//! Opens the CV terminal window, or runs a headless session over
//! stdin/stdout with `--headless`.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use eframe::egui;
use tracing::{debug, error, info, warn};

use cvterm::config::preferences::{PreferenceStore, AVAILABLE_LANGUAGES};
use cvterm::headless::run_headless;
use cvterm::ui::CvTermApp;
use cvterm::{Config, ThemeMode, TranscriptFormat};

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
    /// Theme override for this session
    theme: Option<String>,
    /// Language override for this session
    language: Option<String>,
    /// Read commands from stdin instead of opening a window
    headless: bool,
    /// Write the headless transcript as HTML
    html: bool,
    /// Positional arguments, reported once logging is up
    ignored: Vec<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().context("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                }
                "--debug" | "-d" => app_args.debug = true,
                "--width" | "-w" => {
                    let value = args.next().context("Missing window width")?;
                    app_args.width = Some(value.parse::<f32>().context("Invalid window width")?);
                }
                "--height" | "-h" => {
                    let value = args.next().context("Missing window height")?;
                    app_args.height = Some(value.parse::<f32>().context("Invalid window height")?);
                }
                "--theme" | "-t" => {
                    app_args.theme = Some(args.next().context("Missing theme name")?);
                }
                "--lang" | "-l" => {
                    app_args.language = Some(args.next().context("Missing language code")?);
                }
                "--headless" => app_args.headless = true,
                "--html" => app_args.html = true,
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("{} v{}", cvterm::NAME, cvterm::VERSION);
                    process::exit(0);
                }
                other if other.starts_with('-') => bail!("Unknown option: {}", other),
                _ => app_args.ignored.push(arg),
            }
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("{} - {}", cvterm::NAME, cvterm::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    cvterm [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -t, --theme <THEME>    Theme for this session (dark, light)");
    println!("    -l, --lang <LANG>      CV language for this session ({})", AVAILABLE_LANGUAGES.join(", "));
    println!("        --headless         Read commands from stdin, write the transcript to stdout");
    println!("        --html             Write the headless transcript as HTML");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    cvterm looks for configuration files in the following order:");
    println!("    1. Path specified with --config or $CVTERM_CONFIG");
    println!("    2. $XDG_CONFIG_HOME/cvterm/config.toml");
    println!("    3. <config dir>/cvterm/config.toml");
    println!("    4. ~/.cvterm/config.toml");
    println!("    5. ./cvterm.toml");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    CVTERM_CONFIG    Path to configuration file");
    println!("    CVTERM_DEBUG     Enable debug logging (1 or true)");
    println!("    RUST_LOG         Set logging level (error, warn, info, debug, trace)");
}

fn main() -> anyhow::Result<()> {
    let args = match AppArgs::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Failed to parse arguments: {:#}", e);
            print_help();
            process::exit(1);
        }
    };

    init_logging(&args);
    info!("Starting {} v{}", cvterm::NAME, cvterm::VERSION);
    debug!("Arguments: {:?}", args);
    for arg in &args.ignored {
        warn!("Ignoring positional argument: {}", arg);
    }

    let config = load_configuration(&args);
    let preferences = PreferenceStore::open_default().unwrap_or_else(|e| {
        warn!("{}. Preferences will not be saved", e);
        PreferenceStore::in_memory()
    });

    let theme = resolve_theme(&args, &config, &preferences);
    let language = resolve_language(&args, &preferences);

    if args.headless {
        let format = if args.html {
            TranscriptFormat::Html
        } else {
            TranscriptFormat::PlainText
        };
        let stdin = io::stdin();
        let summary = run_headless(&config, &language, theme, stdin.lock(), io::stdout(), format)
            .context("Headless session failed")?;
        for action in &summary.actions {
            eprintln!("(would open {})", action.target());
        }
        return Ok(());
    }

    let app = CvTermApp::new(&config, preferences, theme, &language);
    let native_options = create_native_options(&args, &config);

    info!("Opening window");
    if let Err(e) = eframe::run_native(
        "cvterm",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        error!("Application failed: {}", e);
        process::exit(1);
    }

    info!("{} shutdown complete", cvterm::NAME);
    Ok(())
}

/// Set up tracing; `RUST_LOG` wins over the debug flag
fn init_logging(args: &AppArgs) {
    let debug = args.debug
        || env::var("CVTERM_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let log_level = if debug { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Load configuration from file or use defaults
fn load_configuration(args: &AppArgs) -> Config {
    let config_path = args
        .config_path
        .clone()
        .or_else(|| env::var("CVTERM_CONFIG").ok().map(PathBuf::from));

    match config_path {
        Some(path) => cvterm::init_with_config(&path),
        None => cvterm::init(),
    }
}

/// Command line, then stored preference, then config default
fn resolve_theme(args: &AppArgs, config: &Config, preferences: &PreferenceStore) -> ThemeMode {
    if let Some(name) = &args.theme {
        match name.parse() {
            Ok(theme) => return theme,
            Err(e) => warn!("{}. Ignoring --theme", e),
        }
    }
    preferences.theme().unwrap_or(config.ui.default_theme)
}

/// Command line, then stored preference, then the default language
fn resolve_language(args: &AppArgs, preferences: &PreferenceStore) -> String {
    if let Some(language) = &args.language {
        let language = language.trim().to_lowercase();
        if AVAILABLE_LANGUAGES.contains(&language.as_str()) {
            return language;
        }
        warn!("Unknown language '{}'. Ignoring --lang", language);
    }
    preferences.language_or_default().to_string()
}

/// Create native options for the application window
fn create_native_options(args: &AppArgs, config: &Config) -> eframe::NativeOptions {
    let width = args.width.unwrap_or(config.ui.window_width);
    let height = args.height.unwrap_or(config.ui.window_height);

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{}@{}", config.terminal.user, config.terminal.host))
            .with_app_id("cvterm")
            .with_inner_size([width, height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    }
}
