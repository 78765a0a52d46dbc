pub mod assets;
pub mod compose;
pub mod fontcheck;
pub mod naming;
pub mod theme;

// Export theme support
pub use theme::{Theme, ThemeManager, hex_to_color32, color32_to_hex, DEFAULT_THEME};

// Export naming helpers
pub use naming::{slug, filename_for, compose_title, PLACEHOLDER_FILENAME};

// Export compositing
pub use compose::{Composer, ThumbnailContent, CANVAS_WIDTH, CANVAS_HEIGHT};

// Export icon assets
pub use assets::{IconSet, IconSource, icon_manifest};

// Export font probe
pub use fontcheck::is_font_available;
