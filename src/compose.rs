//! Composite renderer: background fill, icon, and text layers rasterized
//! into a fixed 1920x1080 pixmap.
//!
//! Rendering is a full repaint, CPU-side and deterministic: the same theme,
//! field values, and icon set always produce byte-identical pixels. Text is
//! laid out by `usvg` against a font database built once at startup, so the
//! renderer itself never touches the filesystem.

use crate::assets::IconSet;
use crate::theme::{color32_to_hex, Theme};
use anyhow::{Context, Result};
use std::sync::Arc;
use tiny_skia::Pixmap;
use usvg::fontdb;

/// Composite width in pixels.
pub const CANVAS_WIDTH: u32 = 1920;
/// Composite height in pixels.
pub const CANVAS_HEIGHT: u32 = 1080;

/// Font family drawn on the composite; checked against the system at startup.
pub const FONT_FAMILY: &str = "Helvetica";

/// Icon height on the canvas, in pixels.
const ICON_HEIGHT: f32 = 340.0;
/// Vertical center of the icon, as a fraction of canvas height.
const ICON_CENTER_FRACTION: f32 = 0.28;

/// Baseline for a single description line, as a fraction of canvas height.
const DESC_SINGLE_FRACTION: f32 = 0.60;
/// Baselines when both description lines are present.
const DESC_FIRST_FRACTION: f32 = 0.52;
const DESC_SECOND_FRACTION: f32 = 0.665;
/// Baseline of the instructor/date line.
const BYLINE_FRACTION: f32 = 0.88;

const DESC_FONT_SIZE: f32 = 130.0;
const BYLINE_FONT_SIZE: f32 = 60.0;

/// Text drawn onto the composite, straight from the form fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThumbnailContent<'a> {
    pub desc1: &'a str,
    pub desc2: &'a str,
    pub instructor: &'a str,
    pub date: &'a str,
}

/// Renders composites against a font database built once at startup.
pub struct Composer {
    fontdb: Arc<fontdb::Database>,
}

impl Composer {
    /// Creates a composer backed by the system font database.
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Creates a composer with a caller-provided font database.
    pub fn with_fontdb(fontdb: Arc<fontdb::Database>) -> Self {
        Self { fontdb }
    }

    /// The font database used for text layout and the availability probe.
    pub fn fontdb(&self) -> &fontdb::Database {
        &self.fontdb
    }

    /// Renders the full composite for the given theme and field values.
    ///
    /// The icon set must be complete before this is called; the caller
    /// gates rendering on asset load completion.
    pub fn render(
        &self,
        theme: &Theme,
        icons: &IconSet,
        content: &ThumbnailContent,
    ) -> Result<Pixmap> {
        let icon = icons
            .get(theme.icon_color)
            .with_context(|| format!("no '{}' icon loaded", theme.icon_color))?;

        let mut pixmap = Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT)
            .context("failed to allocate composite pixmap")?;

        // Layer 1: solid theme background
        let bg = theme.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(bg.r(), bg.g(), bg.b(), 255));

        // Layer 2: icon, scaled to a fixed height and centered horizontally
        let icon_size = icon.size();
        let scale = ICON_HEIGHT / icon_size.height();
        let drawn_width = icon_size.width() * scale;
        let tx = (CANVAS_WIDTH as f32 - drawn_width) / 2.0;
        let ty = CANVAS_HEIGHT as f32 * ICON_CENTER_FRACTION - ICON_HEIGHT / 2.0;
        let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);
        resvg::render(icon, transform, &mut pixmap.as_mut());

        // Layer 3: text
        let svg = self.text_layer_svg(theme, content);
        let opt = self.text_options();
        let tree =
            usvg::Tree::from_str(&svg, &opt).context("failed to build text layer")?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        Ok(pixmap)
    }

    fn text_options(&self) -> usvg::Options {
        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.fontdb);
        opt.font_family = FONT_FAMILY.to_string();
        opt
    }

    /// Builds the SVG for the text layer. Transparent outside the glyphs,
    /// sized to the canvas so it renders with an identity transform.
    fn text_layer_svg(&self, theme: &Theme, content: &ThumbnailContent) -> String {
        let fill = color32_to_hex(theme.foreground);
        let height = CANVAS_HEIGHT as f32;
        let center_x = CANVAS_WIDTH as f32 / 2.0;

        let mut body = String::new();
        let desc1 = content.desc1.trim();
        let desc2 = content.desc2.trim();

        let mut push_line = |text: &str, y: f32, size: f32| {
            body.push_str(&format!(
                r#"<text x="{x}" y="{y}" text-anchor="middle" font-family="{family}, sans-serif" font-size="{size}" font-weight="bold" fill="{fill}">{text}</text>"#,
                x = center_x,
                y = y,
                family = FONT_FAMILY,
                size = size,
                fill = fill,
                text = xml_escape(text),
            ));
        };

        // Single line sits lower than the first of two lines
        if desc2.is_empty() {
            if !desc1.is_empty() {
                push_line(desc1, height * DESC_SINGLE_FRACTION, DESC_FONT_SIZE);
            }
        } else {
            push_line(desc1, height * DESC_FIRST_FRACTION, DESC_FONT_SIZE);
            push_line(desc2, height * DESC_SECOND_FRACTION, DESC_FONT_SIZE);
        }

        let byline = byline(content.instructor, content.date);
        if !byline.is_empty() {
            push_line(&byline, height * BYLINE_FRACTION, BYLINE_FONT_SIZE);
        }

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT,
            body = body,
        )
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes a rendered composite as PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    pixmap.encode_png().context("failed to encode PNG")
}

/// Formats the instructor/date line, omitting empty components.
fn byline(instructor: &str, date: &str) -> String {
    [instructor.trim(), date.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" \u{2022} ")
}

/// Escapes text for inclusion in an SVG text node.
fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
