//! Theme support module for the thumbnail composer
//!
//! A theme pairs a background fill with a foreground (text/icon) color and
//! names which icon variant is drawn on the composite. The set is fixed and
//! hardcoded; "Red" is the default used whenever a persisted theme name is
//! no longer recognized.
//!
//! # Examples
//!
//! ```
//! use thumbgen::theme::{ThemeManager, DEFAULT_THEME};
//!
//! let manager = ThemeManager::new();
//! let red = manager.get_theme(DEFAULT_THEME).unwrap();
//! println!("Red background: {:?}", red.background);
//! ```

use egui::Color32;
use once_cell::sync::Lazy;

/// Name of the theme substituted when a requested theme does not exist.
pub const DEFAULT_THEME: &str = "Red";

/// A complete theme definition: colors for the composite plus the icon variant.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Solid fill behind the whole composite
    pub background: Color32,
    /// Color used for all text layers
    pub foreground: Color32,
    /// Key into the icon set ("white" or "black")
    pub icon_color: &'static str,
}

static BUILTIN_THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme {
            name: "Red".to_string(),
            background: hex_to_color32("#c0272d"),
            foreground: Color32::WHITE,
            icon_color: "white",
        },
        Theme {
            name: "Dark Blue".to_string(),
            background: hex_to_color32("#1d3557"),
            foreground: Color32::WHITE,
            icon_color: "white",
        },
        Theme {
            name: "Blue".to_string(),
            background: hex_to_color32("#2a6fb0"),
            foreground: Color32::WHITE,
            icon_color: "white",
        },
        Theme {
            name: "Light Blue".to_string(),
            background: hex_to_color32("#a8dadc"),
            foreground: hex_to_color32("#1c1c1c"),
            icon_color: "black",
        },
        Theme {
            name: "Gray".to_string(),
            background: hex_to_color32("#58585a"),
            foreground: Color32::WHITE,
            icon_color: "white",
        },
    ]
});

/// Centralized theme manager providing access to the built-in themes.
///
/// Themes are kept in display order rather than sorted, so the selector
/// shows them the way the palette was designed.
pub struct ThemeManager {
    themes: Vec<Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        Self {
            themes: BUILTIN_THEMES.clone(),
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Returns all theme names in display order.
    pub fn list_themes(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// Gets the currently selected theme.
    pub fn current_theme(&self) -> &Theme {
        self.get_theme(&self.current_theme_name)
            .unwrap_or_else(|| &self.themes[0])
    }

    /// Sets the current theme by name.
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.get_theme(name).is_some() {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Resolves a possibly-stale theme name to a known one.
    ///
    /// Persisted names that no longer match a built-in theme fall back to
    /// [`DEFAULT_THEME`].
    pub fn resolve_theme_name(&self, name: &str) -> String {
        if self.get_theme(name).is_some() {
            name.to_string()
        } else {
            DEFAULT_THEME.to_string()
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a hex color string (like "#c0272d") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    // The length check counts bytes, so non-ASCII input must be rejected
    // before slicing at fixed offsets
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Formats a color as a "#rrggbb" hex string for SVG attributes
pub fn color32_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_theme_order() {
        let manager = ThemeManager::new();
        assert_eq!(
            manager.list_themes(),
            vec!["Red", "Dark Blue", "Blue", "Light Blue", "Gray"]
        );
    }

    #[test]
    fn test_default_theme_is_current() {
        let manager = ThemeManager::new();
        assert_eq!(manager.current_theme().name, DEFAULT_THEME);
    }

    #[test]
    fn test_set_unknown_theme_rejected() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Mauve").is_err());
        assert_eq!(manager.current_theme().name, DEFAULT_THEME);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let manager = ThemeManager::new();
        assert_eq!(manager.resolve_theme_name("Dark Blue"), "Dark Blue");
        assert_eq!(manager.resolve_theme_name("Chartreuse"), DEFAULT_THEME);
    }

    #[test]
    fn test_hex_round_trip() {
        let color = hex_to_color32("#1d3557");
        assert_eq!(color32_to_hex(color), "#1d3557");
    }

    #[test]
    fn test_hex_malformed_falls_back_to_black() {
        assert_eq!(hex_to_color32("#fff"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_hex_non_ascii_falls_back_to_black() {
        // Six bytes but two characters; must not panic on a byte slice
        assert_eq!(hex_to_color32("€€"), Color32::from_rgb(0, 0, 0));
        assert_eq!(hex_to_color32("#日本"), Color32::from_rgb(0, 0, 0));
    }
}
