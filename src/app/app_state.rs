//! Centralized application state for the thumbnail composer.
//!
//! Composes focused state components so each aspect of the application
//! keeps its invariants local and borrow-checker friendly.

use crate::state::{FormState, PreviewState, ThemeState};
use thumbgen::{Composer, IconSet};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Form fields and their derived values
    pub form: FormState,

    /// Composite theme selection
    pub theme: ThemeState,

    /// Rendered composite and its texture
    pub preview: PreviewState,

    /// Icon set; `None` until every manifest entry has loaded
    pub icons: Option<IconSet>,

    /// Composite renderer, holding the font database built at startup
    pub composer: Composer,

    /// Shown once when the expected font family is not installed
    pub font_warning: Option<String>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            theme: ThemeState::new(),
            preview: PreviewState::new(),
            icons: None,
            composer: Composer::new(),
            font_warning: None,
            error_message: None,
        }
    }

    /// Creates an AppState from values restored out of persistent storage.
    pub fn with_restored(form: FormState, theme_name: String) -> Self {
        Self {
            form,
            theme: ThemeState::with_theme(theme_name),
            preview: PreviewState::new(),
            icons: None,
            composer: Composer::new(),
            font_warning: None,
            error_message: None,
        }
    }

    /// True once every icon asset has loaded; no draw happens before this.
    pub fn assets_ready(&self) -> bool {
        self.icons.is_some()
    }
}
