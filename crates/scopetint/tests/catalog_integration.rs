use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use scopetint::{CatalogError, Color, ThemeCatalog, FALLBACK_THEME_NAME};
use tempfile::TempDir;

const TWILIGHT: &str = r##"
name: Twilight
settings:
  - settings:
      foreground: "#F8F8F8"
      background: "#141414"
  - scope: keyword.control
    settings: {foreground: "#CDA869", fontStyle: bold}
  - scope: string
    settings: {foreground: "#8F9D6A"}
"##;

const DAYBREAK: &str = r##"
name: Daybreak
settings:
  - settings:
      foreground: "#222222"
      background: "#FFFFFF"
  - scope: keyword.control
    settings: {foreground: "#0000CC"}
"##;

#[test]
fn load_dir_registers_by_document_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("twilight.yaml"), TWILIGHT).unwrap();
    fs::write(dir.path().join("daybreak.yaml"), DAYBREAK).unwrap();

    let mut catalog = ThemeCatalog::new();
    let loaded = catalog.load_dir(dir.path()).unwrap();

    assert_eq!(loaded, 2);
    assert_eq!(
        catalog.list_theme_names(),
        vec![
            "Daybreak".to_string(),
            "Twilight".to_string(),
            FALLBACK_THEME_NAME.to_string()
        ]
    );
}

#[test]
fn load_dir_skips_malformed_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.yaml"), TWILIGHT).unwrap();
    // No global settings entry: malformed, but only for this theme.
    fs::write(
        dir.path().join("broken.yaml"),
        "settings:\n  - scope: keyword\n    settings: {fontStyle: bold}\n",
    )
    .unwrap();

    let mut catalog = ThemeCatalog::new();
    let loaded = catalog.load_dir(dir.path()).unwrap();

    assert_eq!(loaded, 1);
    assert!(catalog.load("Twilight").is_ok());
}

#[test]
fn load_dir_extension_priority_prefers_yaml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("dusk.yaml"), TWILIGHT).unwrap();
    fs::write(dir.path().join("dusk.yml"), DAYBREAK).unwrap();

    let mut catalog = ThemeCatalog::new();
    let loaded = catalog.load_dir(dir.path()).unwrap();

    assert_eq!(loaded, 1);
    // The .yaml document won, so its name is the one registered.
    assert!(catalog.load("Twilight").is_ok());
    assert!(catalog.load("Daybreak").is_err());
}

#[test]
fn load_file_falls_back_to_file_stem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nameless.yaml");
    fs::write(
        &path,
        "settings:\n  - settings: {foreground: \"#101010\"}\n",
    )
    .unwrap();

    let mut catalog = ThemeCatalog::new();
    let theme = catalog.load_file(&path).unwrap();

    assert_eq!(theme.name(), Some("nameless"));
    assert!(catalog.load("nameless").is_ok());
}

#[test]
fn load_file_surfaces_errors() {
    let dir = TempDir::new().unwrap();
    let mut catalog = ThemeCatalog::new();

    assert!(matches!(
        catalog.load_file(dir.path().join("absent.yaml")),
        Err(CatalogError::Io { .. })
    ));

    let bad = dir.path().join("bad.yaml");
    fs::write(&bad, "settings: notalist\n").unwrap();
    assert!(matches!(
        catalog.load_file(&bad),
        Err(CatalogError::Malformed { .. })
    ));
}

#[test]
fn json_theme_files_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mono.json"),
        r##"{
            "name": "Mono",
            "settings": [
                {"settings": {"foreground": "#F8F8F2"}},
                {"scope": "comment", "settings": {"fontStyle": "italic"}}
            ]
        }"##,
    )
    .unwrap();

    let mut catalog = ThemeCatalog::new();
    catalog.load_dir(dir.path()).unwrap();
    catalog.set_active("Mono").unwrap();

    assert!(catalog.active().style_for_scope("comment.line").italic());
}

#[test]
fn activation_notifies_every_listener_with_the_new_theme() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("twilight.yaml"), TWILIGHT).unwrap();

    let mut catalog = ThemeCatalog::new();
    catalog.load_dir(dir.path()).unwrap();

    let names = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&names);
    catalog.on_change(move |theme| {
        sink.lock().unwrap().push(theme.name().unwrap_or("").to_string());
    });
    let count = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&count);
    catalog.on_change(move |_| {
        hits.fetch_add(1, Ordering::SeqCst);
    });

    catalog.set_active("Twilight").unwrap();
    catalog.set_active(FALLBACK_THEME_NAME).unwrap();

    assert_eq!(
        *names.lock().unwrap(),
        vec!["Twilight".to_string(), FALLBACK_THEME_NAME.to_string()]
    );
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn renderer_flow_resolves_through_active_theme() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("twilight.yaml"), TWILIGHT).unwrap();

    let mut catalog = ThemeCatalog::new();
    catalog.load_dir(dir.path()).unwrap();
    catalog.set_active("Twilight").unwrap();

    let style = catalog.active().style_for_scope("keyword.control.ruby");
    assert!(style.bold());
    assert_eq!(style.foreground, Some(Color::new(0xCD, 0xA8, 0x69)));
    assert_eq!(style.background, Some(Color::new(0x14, 0x14, 0x14)));

    // Scopes no rule matches get the global attributes.
    let plain = catalog.active().style_for_scope("entity.name.function");
    assert_eq!(plain.foreground, Some(Color::new(0xF8, 0xF8, 0xF8)));
    assert!(!plain.bold());
}

#[test]
fn refresh_reloads_and_repoints_active() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("twilight.yaml");
    fs::write(&path, TWILIGHT).unwrap();

    let mut catalog = ThemeCatalog::new();
    catalog.load_dir(dir.path()).unwrap();
    catalog.set_active("Twilight").unwrap();

    let swaps = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&swaps);
    catalog.on_change(move |_| {
        hits.fetch_add(1, Ordering::SeqCst);
    });

    // Edit the file: keyword.control turns red.
    fs::write(
        &path,
        r##"
name: Twilight
settings:
  - settings: {foreground: "#F8F8F8"}
  - scope: keyword.control
    settings: {foreground: "#CC0000"}
"##,
    )
    .unwrap();

    catalog.refresh().unwrap();

    assert_eq!(swaps.load(Ordering::SeqCst), 1);
    let style = catalog.active().style_for_scope("keyword.control.ruby");
    assert_eq!(style.foreground, Some(Color::new(0xCC, 0x00, 0x00)));
}

#[test]
fn resolution_keeps_working_across_a_swap() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("twilight.yaml"), TWILIGHT).unwrap();
    fs::write(dir.path().join("daybreak.yaml"), DAYBREAK).unwrap();

    let mut catalog = ThemeCatalog::new();
    catalog.load_dir(dir.path()).unwrap();
    catalog.set_active("Twilight").unwrap();

    let in_flight = catalog.active();
    catalog.set_active("Daybreak").unwrap();

    // The earlier handle still resolves with the theme it captured.
    assert_eq!(
        in_flight.style_for_scope("string.quoted").foreground,
        Some(Color::new(0x8F, 0x9D, 0x6A))
    );
    assert_eq!(
        catalog.active().style_for_scope("keyword.control").foreground,
        Some(Color::new(0x00, 0x00, 0xCC))
    );
}
