//! Theme state management.
//!
//! Encapsulates the theme manager and the currently selected theme name.

use thumbgen::{ThemeManager, Theme};

/// State related to the composite's visual theme.
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = theme_manager.current_theme().name.clone();
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    /// Creates a new theme state with a specific theme.
    ///
    /// Unknown names are substituted with the default theme.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = theme_manager.resolve_theme_name(&theme_name);
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    // ===== Theme Queries =====

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the current theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Returns the currently selected theme definition.
    pub fn current_theme(&self) -> Theme {
        self.theme_manager
            .get_theme(&self.current_theme_name)
            .cloned()
            .unwrap_or_else(|| self.theme_manager.current_theme().clone())
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name, substituting the default when unknown.
    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = self.theme_manager.resolve_theme_name(&theme_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thumbgen::DEFAULT_THEME;

    #[test]
    fn test_unknown_restored_theme_falls_back() {
        let state = ThemeState::with_theme("Hot Pink".to_string());
        assert_eq!(state.current_theme_name(), DEFAULT_THEME);
    }

    #[test]
    fn test_known_restored_theme_kept() {
        let state = ThemeState::with_theme("Light Blue".to_string());
        assert_eq!(state.current_theme_name(), "Light Blue");
    }
}
