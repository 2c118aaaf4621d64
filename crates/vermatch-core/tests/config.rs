use std::path::PathBuf;

use vermatch_core::config::{dirs_path, GlobalConfig};

#[test]
fn test_global_config_default_excludes_prerelease() {
    let config = GlobalConfig::default();
    assert!(!config.resolve.include_prerelease);
}

#[test]
fn test_global_config_default_no_catalog() {
    let config = GlobalConfig::default();
    assert!(config.resolve.catalog.is_none());
}

#[test]
fn test_global_config_empty_toml_uses_defaults() {
    let config: GlobalConfig = toml::from_str("").unwrap();
    assert!(!config.resolve.include_prerelease);
    assert!(config.resolve.catalog.is_none());
}

#[test]
fn test_dirs_path_ends_with_vermatch_or_override() {
    let path = dirs_path();
    match std::env::var("VERMATCH_HOME") {
        Ok(dir) => assert_eq!(path, PathBuf::from(dir)),
        Err(_) => assert!(path.ends_with(".vermatch")),
    }
}

#[test]
fn test_default_path_is_config_toml() {
    assert!(GlobalConfig::default_path().ends_with("config.toml"));
}

#[test]
fn test_global_config_parse_from_toml() {
    let toml = r#"
[resolve]
include-prerelease = true
catalog = "/srv/registry/Versions.toml"
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert!(config.resolve.include_prerelease);
    assert_eq!(
        config.resolve.catalog,
        Some(PathBuf::from("/srv/registry/Versions.toml"))
    );
}

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GlobalConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert!(!config.resolve.include_prerelease);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[resolve]\ninclude-prerelease = true\n").unwrap();
    let config = GlobalConfig::load_from(&path).unwrap();
    assert!(config.resolve.include_prerelease);
}

#[test]
fn test_load_from_invalid_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[resolve\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Config error"), "got: {err}");
}
