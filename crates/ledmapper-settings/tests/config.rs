use ledmapper_settings::{Config, ConfigError, SettingsError};
use std::path::PathBuf;

#[test]
fn test_defaults_are_valid() {
    let config = Config::default();
    config.validate().unwrap();
    assert_eq!(config.mapping.default_threshold, 3.0);
    assert_eq!(config.mapping.threshold_step, 0.1);
    assert_eq!(config.trace.pixels_per_cell, 10);
    assert!(config.export.pretty);
}

#[test]
fn test_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::new();
    config.trace.pixels_per_cell = 4;
    config.export.output_directory = PathBuf::from("/tmp/components");
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let mut config = Config::new();
    config.mapping.default_threshold = 1.5;
    config.save_to_file(&path).unwrap();

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[trace]\ncanny_high = 180.0\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.trace.canny_high, 180.0);
    assert_eq!(config.trace.pixels_per_cell, 10);
    assert_eq!(config.mapping, Default::default());
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "mapping: {}").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
    assert!(Config::default().save_to_file(&path).is_err());
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = Config::default();
    config.trace.pixels_per_cell = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    let mut config = Config::default();
    config.trace.canny_low = 200.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.mapping.default_threshold = -1.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.mapping.threshold_step = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[mapping]\nmax_gap_step = -2.0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_load_or_default_prefers_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[export]\npretty = false\n").unwrap();

    let config = Config::load_or_default(Some(&path)).unwrap();
    assert!(!config.export.pretty);
}
