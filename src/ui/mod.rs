//! Window host for the interpreter
//!
//! [`CvTermApp`] owns the interpreter and everything the interpreter must
//! not know about: the egui widgets, the backdrop animation, the stored
//! preferences and the actual opening of links.

pub mod backdrop;
pub mod input;
pub mod transcript;

pub use input::{InputEvent, InputPrompt};
pub use transcript::TranscriptView;

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::config::preferences::{PreferenceStore, AVAILABLE_LANGUAGES};
use crate::config::{Config, Palette, ThemeMode};
use crate::interpreter::{ExternalAction, Interpreter};
use crate::output::ScrollbackBuffer;
use crate::rain::MatrixRain;

/// Commands offered as buttons above the transcript
pub const QUICK_COMMANDS: &[&str] = &[
    "help",
    "about",
    "basic",
    "skills",
    "experience",
    "education",
    "contact",
    "clear",
];

/// Main application structure
pub struct CvTermApp {
    interpreter: Interpreter<ScrollbackBuffer>,
    input: InputPrompt,
    transcript: TranscriptView,
    rain: MatrixRain,
    preferences: PreferenceStore,
    /// Dataset path template, reused on language switches
    dataset_template: Option<PathBuf>,
    language: String,
    /// Theme last written to the preference store
    stored_theme: ThemeMode,
    /// Theme the egui visuals were last set for
    applied_theme: Option<ThemeMode>,
    font_size: f32,
    show_quick_menu: bool,
}

impl CvTermApp {
    /// Build the app; `theme` and `language` are the effective session
    /// values (stored preference or command-line override)
    pub fn new(config: &Config, preferences: PreferenceStore, theme: ThemeMode, language: &str) -> Self {
        let prompt_prefix = config.terminal.prompt_prefix();
        let interpreter = Interpreter::from_config(
            ScrollbackBuffer::with_capacity(config.ui.scrollback_lines),
            config,
            language,
            theme,
        );

        Self {
            interpreter,
            input: InputPrompt::new(prompt_prefix.clone()),
            transcript: TranscriptView::new(prompt_prefix, config.ui.font_size),
            rain: MatrixRain::new(config.rain.clone()),
            preferences,
            dataset_template: config.dataset_path.clone(),
            language: language.to_string(),
            stored_theme: theme,
            applied_theme: None,
            font_size: config.ui.font_size,
            show_quick_menu: config.ui.show_quick_menu,
        }
    }

    pub fn interpreter(&self) -> &Interpreter<ScrollbackBuffer> {
        &self.interpreter
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// React to the prompt
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Submit(line) => {
                self.interpreter.submit(&line);
            }
            InputEvent::HistoryUp => {
                if let Some(entry) = self.interpreter.history_up() {
                    self.input.set_input(entry);
                }
            }
            InputEvent::HistoryDown => {
                if let Some(entry) = self.interpreter.history_down() {
                    self.input.set_input(entry);
                }
            }
        }
    }

    /// Run a quick-menu command exactly as if it had been typed
    pub fn run_quick_command(&mut self, command: &str) {
        self.interpreter.submit(command);
        self.input.focus();
    }

    /// Move to the next available CV language and remember it
    pub fn cycle_language(&mut self) {
        let position = AVAILABLE_LANGUAGES
            .iter()
            .position(|lang| *lang == self.language)
            .unwrap_or(0);
        let next = AVAILABLE_LANGUAGES[(position + 1) % AVAILABLE_LANGUAGES.len()];

        self.interpreter
            .switch_language(self.dataset_template.as_deref(), next);
        self.language = next.to_string();
        if let Err(e) = self.preferences.set_language(next) {
            warn!("Failed to store language preference: {}", e);
        }
    }

    /// Write the theme back to the store once it differs from what was saved
    fn persist_theme(&mut self) {
        let theme = self.interpreter.theme();
        if theme == self.stored_theme {
            return;
        }
        match self.preferences.set_theme(theme) {
            Ok(()) => debug!("Stored theme preference {}", theme),
            Err(e) => warn!("Failed to store theme preference: {}", e),
        }
        self.stored_theme = theme;
    }

    fn apply_theme(&mut self, ctx: &egui::Context, theme: ThemeMode, palette: &Palette) {
        if self.applied_theme == Some(theme) {
            return;
        }
        let mut visuals = if theme.is_light() {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        visuals.panel_fill = palette.background;
        visuals.extreme_bg_color = palette.input_background;
        ctx.set_visuals(visuals);
        self.applied_theme = Some(theme);
    }

    fn render_quick_menu(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for &command in QUICK_COMMANDS {
                if ui.small_button(command).clicked() {
                    self.run_quick_command(command);
                }
            }

            ui.separator();

            let auto_clear = if self.interpreter.auto_clear() {
                "AC:On"
            } else {
                "AC:Off"
            };
            if ui
                .small_button(auto_clear)
                .on_hover_text("Clear the screen before each command")
                .clicked()
            {
                self.interpreter.toggle_auto_clear();
            }

            let theme_label = if self.interpreter.theme().is_light() {
                "Dark"
            } else {
                "Light"
            };
            if ui.small_button(theme_label).clicked() {
                self.interpreter.toggle_theme();
            }

            if ui.small_button(self.language.to_uppercase()).clicked() {
                self.cycle_language();
            }
        });
    }

    fn dispatch_actions(&mut self, ctx: &egui::Context) {
        for action in self.interpreter.drain_actions() {
            let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            let url = action_url(&action, &base);
            info!("Opening {}", url);
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }
    }
}

impl eframe::App for CvTermApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = self.interpreter.theme();
        let palette = theme.palette();
        self.apply_theme(ctx, theme, &palette);

        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::CTRL, egui::Key::L)) {
            self.interpreter.clear_screen();
        }

        if self.show_quick_menu {
            egui::TopBottomPanel::top("cvterm_quick_menu").show(ctx, |ui| {
                self.render_quick_menu(ui);
            });
        }

        egui::TopBottomPanel::bottom("cvterm_prompt").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(event) = self.input.render(ui, &palette, self.font_size) {
                self.handle_input(event);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            backdrop::paint_rain(ui, rect, &mut self.rain, &palette);
            self.transcript
                .render(ui, self.interpreter.output_mut(), &palette);
        });

        self.dispatch_actions(ctx);
        self.persist_theme();

        if self.rain.is_enabled() {
            ctx.request_repaint_after(self.rain.config().frame_interval());
        }
    }
}

/// URL for an action; relative document paths resolve against `base`
pub fn action_url(action: &ExternalAction, base: &Path) -> String {
    match action {
        ExternalAction::OpenUrl(url) => url.clone(),
        ExternalAction::Download(target) if target.contains("://") => target.clone(),
        ExternalAction::Download(target) => {
            let path = Path::new(target);
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                base.join(path)
            };
            format!("file://{}", path.display())
        }
    }
}
