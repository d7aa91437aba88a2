//! # Configuration Tests

use ls8_core::config::{Config, ConfigError, FlagPolicy, MalformedLinePolicy};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn empty_object_gives_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.cpu.flag_policy, FlagPolicy::Clear);
    assert_eq!(config.loader.malformed_lines, MalformedLinePolicy::Skip);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json_str(r#"{ "general": { "max_steps": 5 } }"#).unwrap();
    assert_eq!(config.general.max_steps, Some(5));
    assert!(!config.general.trace_instructions);
    assert_eq!(config.cpu.flag_policy, FlagPolicy::Clear);
}

#[test]
fn unknown_policy_is_parse_error() {
    let err = Config::from_json_str(r#"{ "cpu": { "flag_policy": "Sometimes" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = Config::from_json_str("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid config:"));
}

#[test]
fn reads_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "cpu": { "flag_policy": "Sticky" }, "loader": { "malformed_lines": "Reject" } }"#)
        .unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.cpu.flag_policy, FlagPolicy::Sticky);
    assert_eq!(config.loader.malformed_lines, MalformedLinePolicy::Reject);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
