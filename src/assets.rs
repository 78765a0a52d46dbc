//! Icon asset manifest and the loaded icon set.
//!
//! The composite carries one icon, tinted per theme. Icons live on disk as
//! one SVG file per foreground color; the manifest is fixed and known in
//! advance, and every entry must load before any draw happens.

use anyhow::{Context, Result};
use std::collections::HashMap;

/// One entry in the fixed icon manifest.
#[derive(Debug, Clone, Copy)]
pub struct IconSource {
    /// Foreground color key this icon belongs to; doubles as the map key
    pub color: &'static str,
    /// On-disk path, relative to the working directory
    pub path: &'static str,
}

const ICON_MANIFEST: &[IconSource] = &[
    IconSource {
        color: "white",
        path: "assets/icons/lambda-white.svg",
    },
    IconSource {
        color: "black",
        path: "assets/icons/lambda-black.svg",
    },
];

/// The fixed list of icon files loaded at startup.
pub fn icon_manifest() -> &'static [IconSource] {
    ICON_MANIFEST
}

/// Icons parsed and ready to rasterize, keyed by foreground color.
pub struct IconSet {
    icons: HashMap<&'static str, usvg::Tree>,
}

impl IconSet {
    /// Builds the set from raw SVG text, one entry per manifest source.
    ///
    /// Fails if any entry does not parse; a partially usable set is never
    /// produced.
    pub fn from_sources(sources: Vec<(&'static str, String)>) -> Result<Self> {
        let opt = usvg::Options::default();
        let mut icons = HashMap::new();

        for (color, svg_text) in sources {
            let tree = usvg::Tree::from_str(&svg_text, &opt)
                .with_context(|| format!("failed to parse '{}' icon", color))?;
            icons.insert(color, tree);
        }

        Ok(Self { icons })
    }

    /// Looks up the icon for a foreground color key.
    pub fn get(&self, color: &str) -> Option<&usvg::Tree> {
        self.icons.get(color)
    }

    /// True once every manifest entry is present.
    pub fn is_complete(&self) -> bool {
        ICON_MANIFEST.iter().all(|src| self.icons.contains_key(src.color))
    }
}

/// Reads one manifest entry's SVG text from disk.
pub fn read_icon_source(source: &IconSource) -> Result<(&'static str, String)> {
    let text = std::fs::read_to_string(source.path)
        .with_context(|| format!("failed to read icon '{}'", source.path))?;
    Ok((source.color, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><rect width="16" height="16" fill="#fff"/></svg>"##;

    #[test]
    fn test_manifest_covers_theme_icon_colors() {
        let manager = crate::theme::ThemeManager::new();
        for name in manager.list_themes() {
            let theme = manager.get_theme(name).unwrap();
            assert!(
                ICON_MANIFEST.iter().any(|src| src.color == theme.icon_color),
                "no icon for theme '{}'",
                name
            );
        }
    }

    #[test]
    fn test_icon_set_completeness() {
        let sources = ICON_MANIFEST
            .iter()
            .map(|src| (src.color, TEST_SVG.to_string()))
            .collect();
        let set = IconSet::from_sources(sources).unwrap();
        assert!(set.is_complete());
        assert!(set.get("white").is_some());
        assert!(set.get("magenta").is_none());
    }

    #[test]
    fn test_partial_set_is_incomplete() {
        let set = IconSet::from_sources(vec![("white", TEST_SVG.to_string())]).unwrap();
        assert!(!set.is_complete());
    }

    #[test]
    fn test_invalid_svg_rejected() {
        let result = IconSet::from_sources(vec![("white", "<not svg".to_string())]);
        assert!(result.is_err());
    }
}
