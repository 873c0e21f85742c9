//! Painter for the falling-character backdrop

use eframe::egui;

use crate::config::Palette;
use crate::rain::MatrixRain;

/// Size the rain to `rect`, advance it if due and paint its trail
pub fn paint_rain(ui: &egui::Ui, rect: egui::Rect, rain: &mut MatrixRain, palette: &Palette) {
    if !rain.is_enabled() {
        return;
    }
    rain.resize(rect.width(), rect.height());
    rain.tick(std::time::Instant::now());

    let painter = ui.painter_at(rect);
    let font = egui::FontId::monospace(rain.config().column_width);
    for glyph in rain.trail() {
        // Keep the glyphs well behind the text.
        let color = palette.rain_glyph.gamma_multiply(glyph.opacity() * 0.35);
        painter.text(
            rect.min + egui::vec2(glyph.x, glyph.y),
            egui::Align2::LEFT_TOP,
            glyph.ch,
            font.clone(),
            color,
        );
    }
}
