//! Font availability probe.
//!
//! The composite expects a specific family; if the system does not provide
//! it, rendering still works through fallback fonts, but the user should be
//! told once. This replaces the off-screen width-comparison trick a browser
//! would need: the font database can be queried directly.

use usvg::fontdb;

/// Returns true if the named family resolves to an installed face.
pub fn is_font_available(db: &fontdb::Database, family: &str) -> bool {
    let query = fontdb::Query {
        families: &[fontdb::Family::Name(family)],
        ..fontdb::Query::default()
    };
    db.query(&query).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_database_has_no_fonts() {
        let db = fontdb::Database::new();
        assert!(!is_font_available(&db, "Helvetica"));
        assert!(!is_font_available(&db, ""));
    }
}
