//! String normalization for filenames and the generated title line.
//!
//! These are total functions: any input produces a well-formed output, so
//! they can run on every keystroke without a failure path.

/// Download name used when the filename field is empty.
pub const PLACEHOLDER_FILENAME: &str = "thumbnail.png";

/// Normalizes raw description text into a filesystem-safe slug.
///
/// Steps, in order: lower-case and trim, strip pre-existing hyphens,
/// turn whitespace runs into hyphens, drop anything outside `[-a-z0-9]`,
/// then collapse hyphen runs. The result matches
/// `^[a-z0-9]*(-[a-z0-9]+)*$` or is empty.
pub fn slug(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;
    for c in lowered.chars() {
        if c == '-' {
            // Hyphens in the source text are removed, not kept as separators
            continue;
        }
        if c.is_whitespace() {
            pending_hyphen = !out.is_empty();
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(c);
        }
    }
    out
}

/// Builds the autogenerated filename from the two description fields.
///
/// Non-empty slugs are joined with a hyphen and suffixed with `.png`.
/// Returns an empty string when both parts slug to nothing; the download
/// handler substitutes [`PLACEHOLDER_FILENAME`] in that case.
pub fn filename_for(desc1: &str, desc2: &str) -> String {
    let parts: Vec<String> = [slug(desc1), slug(desc2)]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("{}.png", parts.join("-"))
    }
}

/// Concatenates the trimmed source fields into the title string.
///
/// Empty fields are omitted so the `" - "` separator never doubles up.
pub fn compose_title(desc1: &str, desc2: &str, instructor: &str, date: &str) -> String {
    [desc1, desc2, instructor, date]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lowercases_and_strips_punctuation() {
        assert_eq!(slug("Intro to CS!!"), "intro-to-cs");
        assert_eq!(slug("C++ Basics"), "c-basics");
    }

    #[test]
    fn test_slug_removes_source_hyphens() {
        // Source hyphens vanish; the surrounding spaces become one separator
        assert_eq!(slug("  A - B  "), "a-b");
        assert_eq!(slug("all-in-one"), "allinone");
    }

    #[test]
    fn test_slug_collapses_separator_runs() {
        assert_eq!(slug("a   b\t\tc"), "a-b-c");
    }

    #[test]
    fn test_slug_empty_and_symbol_only() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("  !!  "), "");
    }

    #[test]
    fn test_slug_never_ends_with_hyphen() {
        assert_eq!(slug("week 1: "), "week-1");
        assert_eq!(slug("a !"), "a");
    }

    #[test]
    fn test_slug_output_shape() {
        for input in ["Intro to CS!!", "  A - B  ", "Über Düsseldorf", "---", "42"] {
            let s = slug(input);
            assert!(!s.starts_with('-'), "{:?} -> {:?}", input, s);
            assert!(!s.ends_with('-'), "{:?} -> {:?}", input, s);
            assert!(!s.contains("--"), "{:?} -> {:?}", input, s);
            assert!(
                s.chars().all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit()),
                "{:?} -> {:?}",
                input,
                s
            );
        }
    }

    #[test]
    fn test_filename_single_part() {
        assert_eq!(filename_for("Intro", ""), "intro.png");
        assert_eq!(filename_for("", "Part Two"), "part-two.png");
    }

    #[test]
    fn test_filename_both_parts() {
        assert_eq!(filename_for("Intro to CS", "Week 1"), "intro-to-cs-week-1.png");
    }

    #[test]
    fn test_filename_empty_when_no_content() {
        assert_eq!(filename_for("", ""), "");
        assert_eq!(filename_for(" !! ", "--"), "");
    }

    #[test]
    fn test_title_all_fields() {
        assert_eq!(
            compose_title("Intro to CS", "Week 1", "Ada Lovelace", "2026-08-28"),
            "Intro to CS - Week 1 - Ada Lovelace - 2026-08-28"
        );
    }

    #[test]
    fn test_title_omits_empty_fields() {
        assert_eq!(
            compose_title("Intro to CS", "", "Ada Lovelace", "2026-08-28"),
            "Intro to CS - Ada Lovelace - 2026-08-28"
        );
        assert_eq!(compose_title("", "", "", ""), "");
    }

    #[test]
    fn test_title_trims_fields() {
        assert_eq!(compose_title("  Intro  ", "   ", "Ada", ""), "Intro - Ada");
    }
}
