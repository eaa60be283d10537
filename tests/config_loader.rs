use std::io::Write;

use moviesdecade::config::{Config, ConfigError};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).expect("Failed to create config");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.search.debounce(), Duration::from_millis(300));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn parses_all_sections() {
    let (_dir, path) = write_config(
        r#"
[search]
debounce_ms = 250

[catalog]
path = "/data/movies.json"

[logging]
level = "moviesdecade=debug"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.search.debounce_ms, 250);
    assert_eq!(config.catalog.path, Some(PathBuf::from("/data/movies.json")));
    assert_eq!(config.logging.level, "moviesdecade=debug");
    assert_eq!(config.catalog_path(&path), PathBuf::from("/data/movies.json"));
}

#[test]
fn catalog_defaults_next_to_config() {
    let (dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog_path(&path), dir.path().join("movies.json"));
}

#[test]
fn rejects_zero_debounce() {
    let (_dir, path) = write_config("[search]\ndebounce_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn rejects_empty_log_level() {
    let (_dir, path) = write_config("[logging]\nlevel = \"  \"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn reports_parse_errors_with_path() {
    let (_dir, path) = write_config("[search\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}
