//! Theme persistence coordination.
//!
//! Handles loading and saving the selected theme name across sessions.

use thumbgen::{ThemeManager, DEFAULT_THEME};

const THEME_KEY: &str = "theme";

/// Coordinates theme persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference from persistent storage at startup.
    ///
    /// A stored name that no longer matches a built-in theme is silently
    /// substituted with the default.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        let manager = ThemeManager::new();
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .map(|name| manager.resolve_theme_name(&name))
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    /// Saves the current theme preference during application shutdown.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }
}
