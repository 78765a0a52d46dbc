//! Form field persistence coordination.
//!
//! Mirrors each tracked field to a flat key-value entry in `eframe`'s
//! storage. Loaded once at startup, written once at shutdown; there is no
//! other write path and no key migration. The checkbox is encoded as the
//! literal string `"true"` (anything else reads as false).

use crate::state::FormState;

const DESC1_KEY: &str = "desc1";
const DESC2_KEY: &str = "desc2";
const INSTNAME_KEY: &str = "instname";
const FILENAME_KEY: &str = "filename";
const AUTOGEN_KEY: &str = "autogen";

/// Coordinates form field persistence.
pub struct FormCoordinator;

impl FormCoordinator {
    /// Restores the form from persistent storage at startup.
    ///
    /// Missing keys read as empty fields; a missing autogen flag defaults
    /// to enabled, matching a fresh form. Derived values are recomputed as
    /// part of the restore.
    pub fn load_form(storage: Option<&dyn eframe::Storage>) -> FormState {
        let get = |key: &str| {
            storage
                .and_then(|s| s.get_string(key))
                .unwrap_or_default()
        };

        let autogen = match storage.and_then(|s| s.get_string(AUTOGEN_KEY)) {
            Some(value) => value == "true",
            None => true,
        };

        // The date is deliberately not persisted; it starts fresh each session
        FormState::restore(
            get(DESC1_KEY),
            get(DESC2_KEY),
            get(INSTNAME_KEY),
            String::new(),
            get(FILENAME_KEY),
            autogen,
        )
    }

    /// Writes every tracked field back to storage during shutdown.
    pub fn save_form(storage: &mut dyn eframe::Storage, form: &FormState) {
        storage.set_string(DESC1_KEY, form.desc1().to_string());
        storage.set_string(DESC2_KEY, form.desc2().to_string());
        storage.set_string(INSTNAME_KEY, form.instructor().to_string());
        storage.set_string(FILENAME_KEY, form.filename().to_string());
        storage.set_string(
            AUTOGEN_KEY,
            if form.autogen() { "true" } else { "false" }.to_string(),
        );
        storage.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_round_trip() {
        let mut storage = MockStorage::new();

        let mut form = FormState::new();
        *form.desc1_mut() = "Intro to CS".to_string();
        *form.desc2_mut() = "Week 1".to_string();
        *form.instructor_mut() = "Ada".to_string();
        *form.date_mut() = "2026-08-28".to_string();
        *form.autogen_mut() = false;
        *form.filename_mut() = "custom.png".to_string();
        form.refresh_derived();

        FormCoordinator::save_form(&mut storage, &form);
        let restored = FormCoordinator::load_form(Some(&storage));

        assert_eq!(restored.desc1(), "Intro to CS");
        assert_eq!(restored.desc2(), "Week 1");
        assert_eq!(restored.instructor(), "Ada");
        // The date starts fresh each session
        assert_eq!(restored.date(), "");
        assert_eq!(restored.filename(), "custom.png");
        assert!(!restored.autogen());
        // Title is derived, not persisted, and comes back recomputed
        assert_eq!(restored.title(), "Intro to CS - Week 1 - Ada");
    }

    #[test]
    fn test_autogen_literal_encoding() {
        let mut storage = MockStorage::new();
        let form = FormState::new();
        FormCoordinator::save_form(&mut storage, &form);
        assert_eq!(storage.get_string(AUTOGEN_KEY).as_deref(), Some("true"));

        storage.set_string(AUTOGEN_KEY, "yes please".to_string());
        assert!(!FormCoordinator::load_form(Some(&storage)).autogen());
    }

    #[test]
    fn test_empty_storage_defaults() {
        let form = FormCoordinator::load_form(Some(&MockStorage::new()));
        assert_eq!(form.desc1(), "");
        assert!(form.autogen());
    }
}
