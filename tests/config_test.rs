// tests/config_test.rs
use git_changelog::config::{load_config, Config};
use git_changelog::ChangelogError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.repository.slug, "repo");
    assert_eq!(config.repository.host, "https://github.com");
    assert_eq!(config.tags.pattern, "v*");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[repository]
slug = "acme/widgets"
host = "https://git.example.com"

[tags]
pattern = "release-*"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.repository.slug, "acme/widgets");
    assert_eq!(config.repository.host, "https://git.example.com");
    assert_eq!(config.tags.pattern, "release-*");
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[repository]
slug = "acme/widgets"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.repository.slug, "acme/widgets");
    // Unspecified fields keep their defaults
    assert_eq!(config.repository.host, "https://github.com");
    assert_eq!(config.tags.pattern, "v*");
}

#[test]
fn test_empty_file_is_all_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"repository = [not valid").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, ChangelogError::Config(_)));
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let result = load_config(Some("/nonexistent/gitchangelog.toml"));
    assert!(result.is_err());
}
