//! Status bar UI rendering
//!
//! Handles the bottom status bar with canvas info and the font warning.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;
use thumbgen::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Renders the status panel at the bottom of the window.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{CANVAS_WIDTH}\u{d7}{CANVAS_HEIGHT} PNG")).strong());
        ui.label(RichText::new("|").strong());

        if state.assets_ready() {
            ui.label(RichText::new(format!(
                "Theme: {} | File: {}",
                state.theme.current_theme_name(),
                state.form.effective_filename()
            )));
        } else {
            ui.label(RichText::new("Loading assets\u{2026}"));
        }

        if let Some(warning) = &state.font_warning {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(warning).color(egui::Color32::ORANGE));
        }
    });
}
