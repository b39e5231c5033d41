use std::fs;

use folio::config::{Config, ConfigError};
use folio::theme::Mode;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.carousel.autoplay_interval_seconds, 5);
    assert_eq!(config.carousel.swipe_threshold_px, 50.0);
    assert!(config.carousel.autoplay);
    assert_eq!(config.theme.mode, Mode::Light);
}

#[test]
fn full_file_parses() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://api.example.com"
timeout_seconds = 10
connect_timeout_seconds = 2

[carousel]
autoplay = false
autoplay_interval_seconds = 8
swipe_threshold_px = 64.0

[theme]
mode = "dark"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://api.example.com");
    assert_eq!(config.api.timeout_seconds, 10);
    assert!(!config.carousel.autoplay);
    assert_eq!(config.carousel.autoplay_interval_seconds, 8);
    assert_eq!(config.theme.mode, Mode::Dark);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://api.example.com"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.carousel.autoplay_interval_seconds, 5);
    assert_eq!(config.theme.mode, Mode::Light);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "this is not toml [");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn non_http_base_url_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "ftp://files.example.com"
"#,
    );

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn empty_base_url_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = ""
"#,
    );

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn zero_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://api.example.com"
timeout_seconds = 0
"#,
    );

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn zero_autoplay_interval_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://api.example.com"

[carousel]
autoplay_interval_seconds = 0
"#,
    );

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn defaults_validate() {
    Config::default().validate().unwrap();
}
