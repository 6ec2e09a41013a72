use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use create_pwa_core::{ICONS, LAUNCH_SCREENS};
use create_pwa::icon::{placeholder_icon, placeholder_launch};
use create_pwa::images::parse_filter;
use create_pwa::{create, CreateError, CreateOptions, ImageResizer};
use tempfile::TempDir;

// Nearest keeps the big launch screens quick in debug builds.
fn resizer() -> ImageResizer {
    ImageResizer { filter: parse_filter("nearest").unwrap() }
}

fn project(name: &str) -> (TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join(name);
    fs::create_dir(&dir).unwrap();
    (tmp, dir)
}

fn with_sources(dir: &Path) {
    placeholder_icon(256).save(dir.join("icon.png")).unwrap();
    placeholder_launch(320, 320).save(dir.join("launch.png")).unwrap();
}

fn entries(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn fresh_directory_gets_exactly_the_scaffold() {
    let (_tmp, dir) = project("demo-app");
    with_sources(&dir);

    let created = create(&dir, &CreateOptions::default(), &resizer()).unwrap();

    assert_eq!(created.app_name, "demo-app");
    let expected: BTreeSet<String> = [
        "icon.png",
        "launch.png",
        "manifest.json",
        "demo-app.appcache",
        "service-worker.js",
        "icons",
        "launch-screens",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(entries(&dir), expected);
    assert_eq!(entries(&dir.join("icons")).len(), ICONS.len());
    assert_eq!(entries(&dir.join("launch-screens")).len(), LAUNCH_SCREENS.len());
    assert_eq!(created.files.len(), ICONS.len() + 3 + LAUNCH_SCREENS.len());
}

#[test]
fn outputs_have_catalog_dimensions() {
    let (_tmp, dir) = project("sizes");
    with_sources(&dir);

    create(&dir, &CreateOptions::default(), &resizer()).unwrap();

    for spec in ICONS {
        let dims = image::image_dimensions(dir.join("icons").join(spec.filename)).unwrap();
        assert_eq!(dims, (spec.width, spec.height), "{}", spec.filename);
    }
    for spec in LAUNCH_SCREENS {
        let dims = image::image_dimensions(dir.join("launch-screens").join(spec.filename)).unwrap();
        assert_eq!(dims, (spec.width, spec.height), "{}", spec.filename);
    }
}

#[test]
fn package_name_wins_over_directory() {
    let (_tmp, dir) = project("checkout");
    fs::write(dir.join("package.json"), r#"{"name": "foo"}"#).unwrap();

    let created = create(&dir, &CreateOptions::default(), &resizer()).unwrap();

    assert_eq!(created.app_name, "foo");
    assert!(dir.join("foo.appcache").is_file());
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "foo");
    assert!(fs::read_to_string(dir.join("service-worker.js")).unwrap().contains("'foo-v1'"));
}

#[test]
fn missing_default_sources_are_skipped() {
    let (_tmp, dir) = project("bare");

    let created = create(&dir, &CreateOptions::default(), &resizer()).unwrap();

    assert_eq!(created.files.len(), 3);
    assert!(!dir.join("icons").exists());
    assert!(!dir.join("launch-screens").exists());
    assert!(dir.join("manifest.json").is_file());
}

#[test]
fn empty_option_disables_a_generator() {
    let (_tmp, dir) = project("no-splash");
    with_sources(&dir);
    let options = CreateOptions { icon: None, launch: Some(PathBuf::new()) };

    create(&dir, &options, &resizer()).unwrap();

    assert!(dir.join("icons").is_dir());
    assert!(!dir.join("launch-screens").exists());
}

#[test]
fn explicit_sources_override_defaults() {
    let (_tmp, dir) = project("custom");
    fs::create_dir(dir.join("art")).unwrap();
    placeholder_icon(128).save(dir.join("art/logo.png")).unwrap();
    let options = CreateOptions { icon: Some("art/logo.png".into()), launch: None };

    create(&dir, &options, &resizer()).unwrap();

    assert_eq!(entries(&dir.join("icons")).len(), ICONS.len());
    assert!(!dir.join("launch-screens").exists());
}

#[test]
fn missing_explicit_source_aborts_the_run() {
    let (_tmp, dir) = project("broken");
    let options = CreateOptions { icon: Some("missing.png".into()), launch: None };

    let err = create(&dir, &options, &resizer()).unwrap_err();

    assert!(matches!(err, CreateError::Decode { .. }));
    assert!(err.to_string().contains("missing.png"));
    assert!(!dir.join("icons").exists());
    assert!(!dir.join("manifest.json").exists());
}

#[test]
fn second_run_overwrites_cleanly() {
    let (_tmp, dir) = project("again");
    with_sources(&dir);

    create(&dir, &CreateOptions::default(), &resizer()).unwrap();
    let manifest_before = fs::read(dir.join("manifest.json")).unwrap();
    fs::write(dir.join("service-worker.js"), "stale").unwrap();
    let created = create(&dir, &CreateOptions::default(), &resizer()).unwrap();

    assert_eq!(fs::read(dir.join("manifest.json")).unwrap(), manifest_before);
    assert_ne!(fs::read_to_string(dir.join("service-worker.js")).unwrap(), "stale");
    assert_eq!(created.files.len(), ICONS.len() + 3 + LAUNCH_SCREENS.len());
}
