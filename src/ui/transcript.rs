//! Scrollback rendering
//!
//! Draws the interpreter's output lines inside a scroll area that stays
//! pinned to the newest line.

use eframe::egui;

use crate::config::Palette;
use crate::models::{LineStyle, OutputLine};
use crate::output::ScrollbackBuffer;

/// Renders a [`ScrollbackBuffer`]
pub struct TranscriptView {
    prompt_prefix: String,
    font_size: f32,
}

impl TranscriptView {
    pub fn new(prompt_prefix: impl Into<String>, font_size: f32) -> Self {
        Self {
            prompt_prefix: prompt_prefix.into(),
            font_size,
        }
    }

    /// Render all lines, consuming a pending scroll request from the buffer
    pub fn render(&self, ui: &mut egui::Ui, buffer: &mut ScrollbackBuffer, palette: &Palette) {
        let scroll_requested = buffer.take_scroll_request();

        egui::ScrollArea::vertical()
            .id_salt("cvterm_transcript")
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                for line in buffer.lines() {
                    self.render_line(ui, line, palette);
                }
                if scroll_requested {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });
    }

    fn render_line(&self, ui: &mut egui::Ui, line: &OutputLine, palette: &Palette) {
        let font = egui::FontId::monospace(self.font_size);
        match line.style {
            LineStyle::Prompt => {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    ui.label(
                        egui::RichText::new(&self.prompt_prefix)
                            .font(font.clone())
                            .color(palette.prompt)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(&line.text)
                            .font(font)
                            .color(palette.foreground),
                    );
                });
            }
            LineStyle::Error => {
                ui.label(
                    egui::RichText::new(&line.text)
                        .font(font)
                        .color(palette.error),
                );
            }
            LineStyle::Normal => {
                // Blank lines still take a row.
                let text = if line.text.is_empty() { " " } else { line.text.as_str() };
                ui.label(
                    egui::RichText::new(text)
                        .font(font)
                        .color(palette.foreground),
                );
            }
        }
    }
}
