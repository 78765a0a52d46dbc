//! State management modules for the thumbnail composer GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Form state (field values and derived title/filename)
//! - Theme state (theme manager, current theme)
//! - Preview state (rendered pixmap, GPU texture, dirty flag)

mod form_state;
mod preview_state;
mod theme_state;

pub use form_state::FormState;
pub use preview_state::PreviewState;
pub use theme_state::ThemeState;
