//! Thumbnail Composer GUI Application
//!
//! Composites a themed background, icon, and course text into a 1920x1080
//! thumbnail using the egui framework. The application features:
//! - Live preview that fully re-renders on every keystroke
//! - A fixed set of composite themes with persistent selection
//! - Autogenerated, filesystem-safe filenames from the description fields
//! - Form values persisted across sessions
//! - Asynchronous icon loading with a loading screen
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Asynchronous icon asset loading
//! - `state/` - Form, theme, and preview state components
//! - `ui/` - UI panel rendering and orchestration

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod io;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, FormCoordinator, ThemeCoordinator};
use io::AssetLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the composer GUI.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_title("Thumbnail Composer"),
        ..Default::default()
    };

    eframe::run_native(
        "Thumbnail Composer",
        options,
        Box::new(|cc| Ok(Box::new(ComposerApp::new(cc)))),
    )
}

/// The main Thumbnail Composer application.
///
/// This struct stays small, delegating most functionality to coordinators:
/// - `ApplicationCoordinator` handles asset loading, rendering, and export
/// - `ThemeCoordinator` and `FormCoordinator` handle persistence
/// - `PanelManager` handles UI panel layout and rendering
struct ComposerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous icon asset loader
    loader: AssetLoader,
    /// True once the startup asset load has been kicked off
    load_started: bool,
}

impl ComposerApp {
    /// Creates a new composer instance with the form and theme restored
    /// from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let form = FormCoordinator::load_form(cc.storage);

        Self {
            state: AppState::with_restored(form, theme_name),
            loader: AssetLoader::new(),
            load_started: false,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::FieldsEdited => {
                ApplicationCoordinator::refresh_derived(&mut self.state);
            }
            PanelInteraction::FilenameEdited => {
                // Direct filename edits are kept verbatim; autogeneration
                // only follows the description fields.
            }
            PanelInteraction::ThemeSelected(name) => {
                self.state.theme.set_theme(name);
                self.state.preview.mark_dirty();
            }
            PanelInteraction::SaveRequested => {
                ApplicationCoordinator::export_composite(&mut self.state);
            }
        }
    }
}

impl eframe::App for ComposerApp {
    /// Called when the app is being shut down - the only write path for
    /// persisted form values.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        FormCoordinator::save_form(storage, &self.state.form);
    }

    /// Shutdown is the only write path; periodic auto-save stays off.
    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::MAX
    }

    /// Main update loop that renders all UI panels and handles application
    /// state:
    /// 1. Kick off the asset load on the first frame
    /// 2. Check for async loading completion
    /// 3. Re-render the composite if it is stale
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.load_started {
            self.load_started = true;
            ApplicationCoordinator::begin_asset_load(&mut self.loader, ctx);
        }

        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);
        ApplicationCoordinator::ensure_preview(&mut self.state, ctx);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
