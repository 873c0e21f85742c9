//! Integration Tests for configuration, preference and dataset files

use std::fs;

use cvterm::config::loader::{ConfigLoader, LoadOptions};
use cvterm::config::preferences::PreferenceStore;
use cvterm::config::ThemeMode;
use cvterm::dataset::CvDataset;
use cvterm::headless::run_headless;
use cvterm::{Config, Error, TranscriptFormat};
use tempfile::TempDir;

#[test]
fn test_config_round_trips_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.terminal.user = "guest".to_string();
    config.ui.default_theme = ThemeMode::Light;
    config.rain.frame_interval_ms = 40;
    config.dataset_path = Some(dir.path().join("cv-{lang}.json"));

    ConfigLoader::save_to_path(&config, &path).unwrap();
    let loaded = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.ui.show_quick_menu = false;
    ConfigLoader::save_to_path(&config, &path).unwrap();
    assert_eq!(ConfigLoader::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_zero_frame_interval_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[rain]\nframe_interval_ms = 0\n").unwrap();

    match ConfigLoader::load_from_file(&path) {
        Err(Error::ConfigValidationFailed { field, .. }) => {
            assert_eq!(field, "rain.frame_interval_ms")
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_loader_uses_search_path() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[terminal]\nuser = \"visitor\"\nhost = \"resume\"\n",
    )
    .unwrap();

    let mut loader = ConfigLoader::new();
    loader.set_search_path(dir.path().join("config"));
    let config = loader.load_with_options(LoadOptions::default()).unwrap();

    assert_eq!(config.terminal.prompt_prefix(), "visitor@resume:~$ ");
    assert_eq!(loader.current_path(), Some(dir.path().join("config.toml").as_path()));
}

#[test]
fn test_preferences_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("preferences.toml");

    let mut store = PreferenceStore::open(path.clone()).unwrap();
    store.set_theme(ThemeMode::Light).unwrap();
    store.set_language("ro").unwrap();

    let reopened = PreferenceStore::open(path.clone()).unwrap();
    assert_eq!(reopened.theme(), Some(ThemeMode::Light));
    assert_eq!(reopened.language(), Some("ro"));

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("cv_theme"));
    assert!(raw.contains("cv_language"));
}

#[test]
fn test_localized_dataset_is_used() {
    let dir = TempDir::new().unwrap();
    let mut romanian = CvDataset::sample();
    romanian.about = "Salut! Sunt Claudiu.".to_string();
    fs::write(
        dir.path().join("cv-ro.json"),
        serde_json::to_string_pretty(&romanian).unwrap(),
    )
    .unwrap();

    let mut config = Config::default();
    config.terminal.show_banner = false;
    config.dataset_path = Some(dir.path().join("cv-{lang}.json"));

    let mut out = Vec::new();
    run_headless(
        &config,
        "ro",
        ThemeMode::Dark,
        "about\n".as_bytes(),
        &mut out,
        TranscriptFormat::PlainText,
    )
    .unwrap();
    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Salut! Sunt Claudiu."));

    // No English file: the built-in CV takes over.
    let english = CvDataset::load_for_language(config.dataset_path.as_deref(), "en");
    assert_eq!(&english, CvDataset::builtin());
}

#[test]
fn test_toml_dataset_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cv.toml");
    let mut dataset = CvDataset::sample();
    dataset.skills.truncate(2);
    fs::write(&path, toml::to_string(&dataset).unwrap()).unwrap();

    let loaded = CvDataset::load_from_file(&path).unwrap();
    assert_eq!(loaded.skills.len(), 2);
    assert_eq!(loaded.experience, dataset.experience);
}
