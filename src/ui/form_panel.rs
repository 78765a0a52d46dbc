//! Form panel UI rendering
//!
//! The left-hand panel with the text fields driving the composite, the
//! filename controls, and the generated title output.

use crate::app::AppState;
use eframe::egui;

/// Result of user interaction with the form panel
pub enum FormPanelInteraction {
    /// One or more watched fields changed this frame
    FieldsEdited,
    /// The filename was edited directly
    FilenameEdited,
}

/// Renders the form panel.
///
/// Watched-field edits trigger the derived-value refresh, keystroke by
/// keystroke. Direct filename edits are reported separately so
/// autogeneration never overwrites them.
pub fn render_form_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<FormPanelInteraction> {
    let mut edited = false;
    let mut filename_edited = false;

    egui::Grid::new("form_fields")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Description line 1:");
            edited |= ui
                .add(egui::TextEdit::singleline(state.form.desc1_mut()).desired_width(220.0))
                .changed();
            ui.end_row();

            ui.label("Description line 2:");
            edited |= ui
                .add(egui::TextEdit::singleline(state.form.desc2_mut()).desired_width(220.0))
                .changed();
            ui.end_row();

            ui.label("Instructor:");
            edited |= ui
                .add(egui::TextEdit::singleline(state.form.instructor_mut()).desired_width(220.0))
                .changed();
            ui.end_row();

            ui.label("Date:");
            edited |= ui
                .add(egui::TextEdit::singleline(state.form.date_mut()).desired_width(220.0))
                .changed();
            ui.end_row();
        });

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Filename:");
        filename_edited |= ui
            .add(egui::TextEdit::singleline(state.form.filename_mut()).desired_width(180.0))
            .changed();
    });
    edited |= ui
        .checkbox(state.form.autogen_mut(), "Autogenerate filename")
        .changed();

    ui.separator();

    ui.label("Title string:");
    let mut title = state.form.title().to_string();
    ui.add(
        egui::TextEdit::singleline(&mut title)
            .interactive(false)
            .desired_width(f32::INFINITY),
    );

    if edited {
        Some(FormPanelInteraction::FieldsEdited)
    } else if filename_edited {
        Some(FormPanelInteraction::FilenameEdited)
    } else {
        None
    }
}
