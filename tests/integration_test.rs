use anyhow::Result;
use std::env;
use std::fs;
use std::sync::Arc;
use thumbgen::assets::{read_icon_source, IconSet};
use thumbgen::compose::{encode_png, Composer, ThumbnailContent};
use thumbgen::{compose_title, filename_for, icon_manifest, slug, ThemeManager};
use usvg::fontdb;

/// Composer with an empty font database so results do not depend on the
/// fonts installed on the host.
fn bare_composer() -> Composer {
    Composer::with_fontdb(Arc::new(fontdb::Database::new()))
}

/// Loads the real on-disk icon manifest.
fn load_icons() -> Result<IconSet> {
    let mut sources = Vec::new();
    for source in icon_manifest() {
        sources.push(read_icon_source(source)?);
    }
    Ok(IconSet::from_sources(sources)?)
}

#[test]
fn test_manifest_icons_load_and_complete() -> Result<()> {
    let icons = load_icons()?;
    assert!(icons.is_complete());
    Ok(())
}

#[test]
fn test_every_theme_renders_with_real_icons() -> Result<()> {
    let icons = load_icons()?;
    let composer = bare_composer();
    let manager = ThemeManager::new();

    let content = ThumbnailContent {
        desc1: "Intro to CS",
        desc2: "Week 1",
        instructor: "Ada Lovelace",
        date: "2026-08-28",
    };

    for name in manager.list_themes() {
        let theme = manager.get_theme(name).unwrap();
        let pixmap = composer.render(theme, &icons, &content)?;

        // Background fill reaches the corners untouched by icon or text
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!(corner.red(), theme.background.r(), "theme '{}'", name);
        assert_eq!(corner.green(), theme.background.g(), "theme '{}'", name);
        assert_eq!(corner.blue(), theme.background.b(), "theme '{}'", name);
    }

    Ok(())
}

#[test]
fn test_render_repeatable_across_composers() -> Result<()> {
    let icons = load_icons()?;
    let manager = ThemeManager::new();
    let theme = manager.get_theme("Blue").unwrap();
    let content = ThumbnailContent {
        desc1: "Data Structures",
        desc2: "",
        instructor: "Grace Hopper",
        date: "Fall 2026",
    };

    let first = bare_composer().render(theme, &icons, &content)?;
    let second = bare_composer().render(theme, &icons, &content)?;
    assert_eq!(first.data(), second.data());

    Ok(())
}

#[test]
fn test_export_round_trip_to_disk() -> Result<()> {
    let icons = load_icons()?;
    let composer = bare_composer();
    let manager = ThemeManager::new();

    let desc1 = "Operating Systems";
    let desc2 = "Scheduling";
    let content = ThumbnailContent {
        desc1,
        desc2,
        instructor: "Ken Thompson",
        date: "2026-08-28",
    };

    let pixmap = composer.render(manager.current_theme(), &icons, &content)?;
    let bytes = encode_png(&pixmap)?;

    let filename = filename_for(desc1, desc2);
    assert_eq!(filename, "operating-systems-scheduling.png");

    let path = env::temp_dir().join(&filename);
    let _ = fs::remove_file(&path);
    fs::write(&path, &bytes)?;

    let written = fs::read(&path)?;
    assert_eq!(written, bytes);
    assert_eq!(&written[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_naming_pipeline_consistency() {
    // The title keeps the raw field text; the filename normalizes it
    let desc1 = "Intro to CS!!";
    let desc2 = "  A - B  ";

    assert_eq!(slug(desc1), "intro-to-cs");
    assert_eq!(slug(desc2), "a-b");
    assert_eq!(filename_for(desc1, desc2), "intro-to-cs-a-b.png");
    assert_eq!(
        compose_title(desc1, desc2, "Ada", ""),
        "Intro to CS!! - A - B - Ada"
    );
}
