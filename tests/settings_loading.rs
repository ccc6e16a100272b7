//! Integration tests for the settings loader.

use std::io::Write;

use exec_agent::config::{load_settings, AppSettings, ConfigError};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_valid_config_round_trip() {
    let config = write_temp(
        "host: 127.0.0.1\n\
         port: 9100\n\
         service_name: agent-under-test\n\
         api_prefix: /v2\n\
         metadata:\n\
         \x20 region: eu-west-1\n\
         logging:\n\
         \x20 level: debug\n",
    );

    let settings = load_settings(config.path(), None).unwrap();

    assert_eq!(settings.host, "127.0.0.1");
    assert_eq!(settings.port, 9100);
    assert_eq!(settings.service_name, "agent-under-test");
    assert_eq!(settings.api_prefix, "/v2");
    assert_eq!(settings.metadata.get("region").map(String::as_str), Some("eu-west-1"));
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_valid_config_without_env_file_uses_defaults() {
    let config = write_temp("service_name: minimal\n");

    let settings = load_settings(config.path(), None).unwrap();

    assert_eq!(settings.service_name, "minimal");
    // Everything else falls back to defaults.
    let defaults = AppSettings::default();
    assert_eq!(settings.host, defaults.host);
    assert_eq!(settings.port, defaults.port);
    assert_eq!(settings.api_prefix, defaults.api_prefix);
}

#[test]
fn test_missing_config_file_is_config_error() {
    let err = load_settings("/nonexistent/app.yaml".as_ref(), None).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "got {err:?}");
}

#[test]
fn test_malformed_config_is_parse_error() {
    let config = write_temp("port: [not, a, port]\n");

    let err = load_settings(config.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
}

#[test]
fn test_unknown_config_key_rejected() {
    let config = write_temp("prot: 9000\n");

    let err = load_settings(config.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
}

#[test]
fn test_missing_env_file_is_config_error() {
    let config = write_temp("{}\n");

    let err = load_settings(config.path(), Some("/nonexistent/app.env".as_ref())).unwrap_err();

    // Must be distinguishable from a missing config file.
    assert!(matches!(err, ConfigError::EnvFile { .. }), "got {err:?}");
}

#[test]
fn test_env_file_overrides_applied() {
    let config = write_temp("port: 9100\nservice_name: from-config\n");
    let env = write_temp(
        "# deployment overrides\n\
         EXEC_AGENT_PORT=9200\n\
         EXEC_AGENT_SERVICE_NAME=\"from env\"\n\
         UNRELATED_VAR=ignored\n",
    );

    let settings = load_settings(config.path(), Some(env.path())).unwrap();

    assert_eq!(settings.port, 9200);
    assert_eq!(settings.service_name, "from env");
}

#[test]
fn test_malformed_env_file_is_config_error() {
    let config = write_temp("{}\n");
    let env = write_temp("EXEC_AGENT_PORT=9200\nbroken line\n");

    let err = load_settings(config.path(), Some(env.path())).unwrap_err();
    assert!(matches!(err, ConfigError::EnvFormat { .. }), "got {err:?}");
}

#[test]
fn test_semantic_validation_reports_all_errors() {
    let config = write_temp("port: 0\napi_prefix: v1\n");

    let err = load_settings(config.path(), None).unwrap_err();
    match err {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_error_message_names_offending_file() {
    let err = load_settings("/nonexistent/app.yaml".as_ref(), None).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/app.yaml"));
}
