//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, form, preview, status) and gates the
//! main page behind asset loading: until the icon set resolves, the central
//! area shows only the loading screen.

use crate::app::AppState;
use crate::ui::{form_panel, header, preview_panel, status_bar};

/// Result of panel interactions that need to be handled by the application
/// coordinator.
pub enum PanelInteraction {
    /// One or more watched form fields changed
    FieldsEdited,
    /// The filename field was edited directly
    FilenameEdited,
    /// A different theme was selected
    ThemeSelected(String),
    /// The user asked to save the composite
    SaveRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the `eframe::App::update()` implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::ThemeSelected(name)) =
                header::render_header(ui, state)
            {
                interaction = Some(PanelInteraction::ThemeSelected(name));
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Loading screen until every icon asset has resolved
        if !state.assets_ready() {
            egui::CentralPanel::default().show(ctx, |ui| {
                preview_panel::render_loading_screen(ui);
            });
            return interaction;
        }

        // Left panel: form fields
        let form_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::SidePanel::left("form_panel")
            .default_width(320.0)
            .resizable(true)
            .frame(form_frame)
            .show(ctx, |ui| {
                ui.heading("Thumbnail Fields");
                ui.separator();

                match form_panel::render_form_panel(ui, state) {
                    Some(form_panel::FormPanelInteraction::FieldsEdited) => {
                        interaction = Some(PanelInteraction::FieldsEdited);
                    }
                    Some(form_panel::FormPanelInteraction::FilenameEdited) => {
                        interaction = Some(PanelInteraction::FilenameEdited);
                    }
                    None => {}
                }
            });

        // Central panel: composite preview
        let preview_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(preview_frame)
            .show(ctx, |ui| {
                if let Some(preview_panel::PreviewPanelInteraction::SaveRequested) =
                    preview_panel::render_preview_panel(ui, state)
                {
                    interaction = Some(PanelInteraction::SaveRequested);
                }
            });

        interaction
    }
}
