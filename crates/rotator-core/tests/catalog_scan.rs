//! Integration tests for catalog scanning through the public API.
//!
//! These tests drive `ImageCatalog::scan` with `RotationSettings` the same way
//! the rotation use cases do.

use std::path::Path;

use rotator_core::{parse_extension_list, ImageCatalog, RotationSettings, DEFAULT_INTERVAL_MINUTES};

fn settings_for(folder: &Path, extensions: &str) -> RotationSettings {
    RotationSettings {
        image_folder: folder.to_path_buf(),
        interval_minutes: DEFAULT_INTERVAL_MINUTES,
        extensions: parse_extension_list(extensions),
    }
}

#[test]
fn test_default_formats_pick_up_all_four_image_types() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    for name in ["1.jpg", "2.jpeg", "3.png", "4.bmp", "5.gif"] {
        std::fs::write(dir.path().join(name), b"").unwrap();
    }
    let settings = RotationSettings::with_defaults(dir.path());

    // Act
    let catalog = ImageCatalog::scan(&settings.image_folder, &settings.extensions);

    // Assert
    assert_eq!(catalog.len(), 4);
    assert!(!catalog
        .images()
        .iter()
        .any(|p| p.extension().is_some_and(|e| e == "gif")));
}

#[test]
fn test_whitespace_around_extensions_is_ignored_when_matching() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sunset.png"), b"").unwrap();
    let settings = settings_for(dir.path(), "jpg ,  png");

    let catalog = ImageCatalog::scan(&settings.image_folder, &settings.extensions);

    assert_eq!(catalog.len(), 1);
    assert_eq!(settings.formats_display(), "jpg, png");
}

#[test]
fn test_rescanning_sees_files_added_after_first_scan() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(dir.path(), "jpg");
    let before = ImageCatalog::scan(&settings.image_folder, &settings.extensions);

    // Act
    std::fs::write(dir.path().join("new.jpg"), b"").unwrap();
    let after = ImageCatalog::scan(&settings.image_folder, &settings.extensions);

    // Assert – a kept catalog is a snapshot; only a fresh scan sees the file.
    assert!(before.is_empty());
    assert_eq!(after.len(), 1);
}

#[test]
fn test_picked_path_exists_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("only.bmp"), b"").unwrap();
    let settings = settings_for(dir.path(), "bmp");

    let catalog = ImageCatalog::scan(&settings.image_folder, &settings.extensions);
    let picked = catalog.pick().expect("one image available");

    assert!(picked.is_file());
    assert!(picked.ends_with("only.bmp"));
}
