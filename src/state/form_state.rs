//! Form field state and the values derived from it.
//!
//! Holds the text buffers the input widgets edit directly, plus the two
//! derived values (title string, autogenerated filename) that are recomputed
//! after every edit.

use thumbgen::compose::ThumbnailContent;
use thumbgen::naming::{compose_title, filename_for, PLACEHOLDER_FILENAME};

/// State of the form fields driving the composite.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// First description line
    desc1: String,
    /// Second description line (may be empty)
    desc2: String,
    /// Instructor name
    instructor: String,
    /// Date string, free-form
    date: String,
    /// Download filename; overwritten on edits while autogen is on
    filename: String,
    /// Whether the filename is derived from the description fields
    autogen: bool,
    /// Derived title line, never edited directly
    title: String,
}

impl FormState {
    /// Creates an empty form with filename autogeneration enabled.
    pub fn new() -> Self {
        Self {
            autogen: true,
            ..Self::default()
        }
    }

    /// Rebuilds a form from persisted values.
    pub fn restore(
        desc1: String,
        desc2: String,
        instructor: String,
        date: String,
        filename: String,
        autogen: bool,
    ) -> Self {
        let mut form = Self {
            desc1,
            desc2,
            instructor,
            date,
            filename,
            autogen,
            title: String::new(),
        };
        form.refresh_derived();
        form
    }

    // ===== Edit Buffers =====

    pub fn desc1(&self) -> &str {
        &self.desc1
    }

    pub fn desc1_mut(&mut self) -> &mut String {
        &mut self.desc1
    }

    pub fn desc2(&self) -> &str {
        &self.desc2
    }

    pub fn desc2_mut(&mut self) -> &mut String {
        &mut self.desc2
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn instructor_mut(&mut self) -> &mut String {
        &mut self.instructor
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn date_mut(&mut self) -> &mut String {
        &mut self.date
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn filename_mut(&mut self) -> &mut String {
        &mut self.filename
    }

    pub fn autogen(&self) -> bool {
        self.autogen
    }

    pub fn autogen_mut(&mut self) -> &mut bool {
        &mut self.autogen
    }

    // ===== Derived Values =====

    /// The generated title line.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Recomputes the title and, while autogen is on, the filename.
    ///
    /// Called after every field edit and once after restore.
    pub fn refresh_derived(&mut self) {
        self.title = compose_title(&self.desc1, &self.desc2, &self.instructor, &self.date);
        if self.autogen {
            self.filename = filename_for(&self.desc1, &self.desc2);
        }
    }

    /// The download name: the filename field, or the placeholder when empty.
    pub fn effective_filename(&self) -> String {
        let name = self.filename.trim();
        if name.is_empty() {
            PLACEHOLDER_FILENAME.to_string()
        } else {
            name.to_string()
        }
    }

    /// The text the renderer draws, borrowed from the current buffers.
    pub fn content(&self) -> ThumbnailContent<'_> {
        ThumbnailContent {
            desc1: &self.desc1,
            desc2: &self.desc2,
            instructor: &self.instructor,
            date: &self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_updates_title_and_filename() {
        let mut form = FormState::new();
        *form.desc1_mut() = "Intro to CS".to_string();
        *form.instructor_mut() = "Ada".to_string();
        form.refresh_derived();

        assert_eq!(form.title(), "Intro to CS - Ada");
        assert_eq!(form.filename(), "intro-to-cs.png");
    }

    #[test]
    fn test_manual_filename_survives_when_autogen_off() {
        let mut form = FormState::new();
        *form.autogen_mut() = false;
        *form.filename_mut() = "my-name.png".to_string();
        *form.desc1_mut() = "Something Else".to_string();
        form.refresh_derived();

        assert_eq!(form.filename(), "my-name.png");
    }

    #[test]
    fn test_effective_filename_placeholder() {
        let form = FormState::new();
        assert_eq!(form.effective_filename(), PLACEHOLDER_FILENAME);
    }

    #[test]
    fn test_restore_recomputes_derived() {
        let form = FormState::restore(
            "Intro".to_string(),
            "Week 1".to_string(),
            "Ada".to_string(),
            "2026-08-28".to_string(),
            String::new(),
            true,
        );
        assert_eq!(form.title(), "Intro - Week 1 - Ada - 2026-08-28");
        assert_eq!(form.filename(), "intro-week-1.png");
    }
}
