use ruidakit_core::RoundingMode;
use ruidakit_camtools::NumericParsePolicy;
use ruidakit_settings::{Config, ConfigError, SettingsError};
use std::path::PathBuf;
use tempfile::TempDir;

fn sample() -> Config {
    let mut config = Config::default();
    config.conversion.work_area_width_mm = 600.0;
    config.conversion.work_area_height_mm = 400.0;
    config.conversion.numeric_parse_policy = NumericParsePolicy::Fail;
    config.conversion.rounding = RoundingMode::Nearest;
    config.conversion.template_path = PathBuf::from("/opt/ruida/square.rd");
    config.server.port = 9000;
    config
}

#[test]
fn test_save_and_load_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    sample().save_to_file(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[conversion]"));
    assert!(text.contains("numeric_parse_policy = \"fail\""));

    assert_eq!(Config::load_from_file(&path).unwrap(), sample());
}

#[test]
fn test_save_and_load_json_in_new_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    sample().save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), sample());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = 3000\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.conversion, Config::default().conversion);
}

#[test]
fn test_unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "server: {}").unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Config(ConfigError::UnsupportedFormat(ext))) if ext == "yaml"
    ));
    assert!(Config::default().save_to_file(&path).is_err());
}

#[test]
fn test_invalid_values_fail_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"conversion": {"work_area_width_mm": -5.0}}"#).unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::Config(ConfigError::ValueOutOfRange { .. }))
    ));
}

#[test]
fn test_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server\nport = ").unwrap();

    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::TomlError(_))
    ));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Config::load_or_default(Some(path.as_path())),
        Err(SettingsError::LoadError(_))
    ));
}
