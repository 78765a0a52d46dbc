//! Header panel UI rendering
//!
//! Handles the top bar with the application title, theme selector, and
//! error display.

use crate::app::AppState;
use eframe::egui;
use egui::Color32;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a different theme
    ThemeSelected(String),
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Thumbnail Composer");

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name,
                        );
                    }
                });

            if old_theme != current_theme {
                interaction = Some(HeaderInteraction::ThemeSelected(current_theme));
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
