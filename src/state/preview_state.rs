//! Preview state: the last rendered composite and its GPU texture.
//!
//! The pixmap is kept so export writes exactly the pixels shown on screen;
//! the dirty flag coalesces redraw requests until the next frame.

use tiny_skia::Pixmap;

/// State of the rendered composite preview.
pub struct PreviewState {
    /// Last rendered composite, also the export source
    pixmap: Option<Pixmap>,
    /// Texture uploaded for on-screen display
    texture: Option<egui::TextureHandle>,
    /// True when field or theme changes require a re-render
    dirty: bool,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewState {
    /// Creates an empty preview that needs its first render.
    pub fn new() -> Self {
        Self {
            pixmap: None,
            texture: None,
            dirty: true,
        }
    }

    /// Marks the preview stale; the next frame re-renders it.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Stores a freshly rendered composite and clears the dirty flag.
    pub fn set_rendered(&mut self, pixmap: Pixmap, texture: egui::TextureHandle) {
        self.pixmap = Some(pixmap);
        self.texture = Some(texture);
        self.dirty = false;
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}
