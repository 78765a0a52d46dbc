//! Application-level coordination and workflow management.
//!
//! Handles asset load completion, the derived-value refresh pipeline,
//! preview re-rendering, and PNG export.

use crate::app::AppState;
use crate::io::{AssetLoader, LoadResult};
use anyhow::Context;
use thumbgen::compose::{self, FONT_FAMILY};
use thumbgen::{is_font_available, Composer, IconSet, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Kicks off asynchronous loading of the icon manifest.
    pub fn begin_asset_load(loader: &mut AssetLoader, ctx: &egui::Context) {
        log::info!("loading {} icon assets", thumbgen::icon_manifest().len());
        loader.start_load(ctx);
    }

    /// Checks for asset load completion and applies the result.
    ///
    /// Called once per frame in the update loop. On success the icon set is
    /// installed, the font probe runs once, and the preview is scheduled for
    /// its first render. On failure the error is surfaced and the
    /// application stays on the loading screen.
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AssetLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success(sources) => {
                match IconSet::from_sources(sources) {
                    Ok(icons) if icons.is_complete() => {
                        log::info!("icon assets loaded");
                        state.icons = Some(icons);
                        state.error_message = None;
                        Self::run_font_probe(state);
                        state.preview.mark_dirty();
                    }
                    Ok(_) => {
                        state.error_message =
                            Some("Error loading assets: icon set incomplete".to_string());
                    }
                    Err(e) => {
                        log::error!("icon parse failed: {e:#}");
                        state.error_message = Some(format!("Error loading assets: {e:#}"));
                    }
                }
                true
            }
            LoadResult::Error(error_msg) => {
                log::error!("asset load failed: {error_msg}");
                state.error_message = Some(format!("Error loading assets: {error_msg}"));
                true
            }
            LoadResult::None => false,
        }
    }

    /// Recomputes the derived fields after any edit and schedules a redraw.
    pub fn refresh_derived(state: &mut AppState) {
        state.form.refresh_derived();
        state.preview.mark_dirty();
    }

    /// Re-renders the composite if it is stale and the assets are ready.
    ///
    /// A full repaint of every layer; nothing is patched incrementally.
    pub fn ensure_preview(state: &mut AppState, ctx: &egui::Context) {
        if !state.preview.is_dirty() {
            return;
        }
        let Some(icons) = &state.icons else {
            return;
        };

        let theme = state.theme.current_theme();
        match state.composer.render(&theme, icons, &state.form.content()) {
            Ok(pixmap) => {
                let image = egui::ColorImage::from_rgba_premultiplied(
                    [CANVAS_WIDTH as usize, CANVAS_HEIGHT as usize],
                    pixmap.data(),
                );
                let texture =
                    ctx.load_texture("composite", image, egui::TextureOptions::LINEAR);
                state.preview.set_rendered(pixmap, texture);
            }
            Err(e) => {
                log::error!("composite render failed: {e:#}");
                state.error_message = Some(format!("Error rendering composite: {e:#}"));
            }
        }
    }

    /// Exports the current composite as a PNG chosen through a save dialog.
    ///
    /// The dialog is pre-filled with the filename field, or the placeholder
    /// when the field is empty.
    pub fn export_composite(state: &mut AppState) {
        let Some(pixmap) = state.preview.pixmap() else {
            return;
        };

        let default_name = state.form.effective_filename();
        let dialog = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(&default_name);

        let Some(path) = dialog.save_file() else {
            return;
        };

        let result = compose::encode_png(pixmap).and_then(|bytes| {
            std::fs::write(&path, bytes)
                .with_context(|| format!("failed to write '{}'", path.display()))
        });

        match result {
            Ok(()) => {
                log::info!("exported composite to '{}'", path.display());
                state.error_message = None;
            }
            Err(e) => {
                log::error!("export failed: {e:#}");
                state.error_message = Some(format!("Error saving image: {e:#}"));
            }
        }
    }

    /// One-shot font probe, run after assets finish loading.
    ///
    /// A missing family is surfaced once as a blocking dialog; rendering
    /// still proceeds with fallback fonts.
    fn run_font_probe(state: &mut AppState) {
        let Some(warning) = Self::font_probe_warning(&state.composer) else {
            return;
        };

        log::warn!("font family '{FONT_FAMILY}' not found, using fallback fonts");
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Font not found")
            .set_description(warning.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();

        state.font_warning = Some(warning);
    }

    /// The warning text for a failed probe; `None` when the family exists.
    fn font_probe_warning(composer: &Composer) -> Option<String> {
        if is_font_available(composer.fontdb(), FONT_FAMILY) {
            None
        } else {
            Some(format!(
                "{FONT_FAMILY} not detected; text will use fallback fonts"
            ))
        }
    }
}
