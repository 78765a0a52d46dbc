//! Preview panel UI rendering
//!
//! Shows the rendered composite scaled to fit, with the save trigger
//! underneath.

use crate::app::AppState;
use eframe::egui;
use thumbgen::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Result of user interaction with the preview panel
pub enum PreviewPanelInteraction {
    /// User clicked the save button
    SaveRequested,
}

/// Renders the preview panel.
pub fn render_preview_panel(
    ui: &mut egui::Ui,
    state: &AppState,
) -> Option<PreviewPanelInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("\u{2b07} Save PNG").clicked() {
            interaction = Some(PreviewPanelInteraction::SaveRequested);
        }
        ui.label(format!("as {}", state.form.effective_filename()));
    });

    ui.separator();

    if let Some(texture) = state.preview.texture() {
        // Fit the 16:9 composite into the remaining space
        let avail = ui.available_size();
        let aspect = CANVAS_WIDTH as f32 / CANVAS_HEIGHT as f32;
        let mut size = egui::vec2(avail.x, avail.x / aspect);
        if size.y > avail.y {
            size = egui::vec2(avail.y * aspect, avail.y);
        }

        ui.centered_and_justified(|ui| {
            ui.add(egui::Image::new(texture).fit_to_exact_size(size));
        });
    } else {
        ui.centered_and_justified(|ui| {
            ui.spinner();
        });
    }

    interaction
}

/// Renders the loading screen shown before the asset set resolves.
pub fn render_loading_screen(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.label("Loading assets\u{2026}");
        });
    });
}
