//! Input prompt component
//!
//! The single-line command field pinned under the transcript. It owns only
//! the text being edited; history lives in the interpreter session and is
//! reached through [`InputEvent`]s.

use eframe::egui;

use crate::config::Palette;

/// What the user asked for through the prompt this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter was pressed; carries the raw text
    Submit(String),
    /// ArrowUp: recall an older command
    HistoryUp,
    /// ArrowDown: recall a newer command
    HistoryDown,
}

/// Input prompt component
pub struct InputPrompt {
    /// Current input text
    current_input: String,
    /// Prompt text drawn before the field, e.g. `claudiu@cv:~$ `
    prompt_text: String,
    /// Move keyboard focus to the field on the next frame
    wants_focus: bool,
}

impl InputPrompt {
    /// Create a new input prompt
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self {
            current_input: String::new(),
            prompt_text: prompt_text.into(),
            wants_focus: true,
        }
    }

    /// Render the prompt and report what happened
    pub fn render(&mut self, ui: &mut egui::Ui, palette: &Palette, font_size: f32) -> Option<InputEvent> {
        let id = ui.make_persistent_id("cvterm_prompt_input");
        let font = egui::FontId::monospace(font_size);
        let mut event = None;

        // Arrow keys would otherwise move the text cursor inside the field.
        if ui.memory(|mem| mem.has_focus(id)) {
            if ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp)) {
                event = Some(InputEvent::HistoryUp);
            } else if ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown)) {
                event = Some(InputEvent::HistoryDown);
            }
        }

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&self.prompt_text)
                    .font(font.clone())
                    .color(palette.prompt)
                    .strong(),
            );

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.current_input)
                    .id(id)
                    .font(font.clone())
                    .frame(false)
                    .desired_width(f32::INFINITY)
                    .hint_text("type a command, e.g. help")
                    .text_color(palette.foreground),
            );

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                event = Some(InputEvent::Submit(std::mem::take(&mut self.current_input)));
                self.wants_focus = true;
            }

            if self.wants_focus {
                response.request_focus();
                self.wants_focus = false;
            }
        });

        event
    }

    /// Replace the field content, e.g. with a recalled command
    pub fn set_input(&mut self, text: String) {
        self.current_input = text;
    }

    /// Get current input text
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Get current prompt text
    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    /// Give the field keyboard focus on the next frame
    pub fn focus(&mut self) {
        self.wants_focus = true;
    }
}
