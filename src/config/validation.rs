//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (port non-zero, prefix shape)
//! - Check the log level is one tracing understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppSettings → Result<(), Vec<ValidationError>>
//! - Runs before settings are accepted into the system

use crate::config::schema::AppSettings;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("port must not be 0")]
    ZeroPort,

    #[error("api_prefix {0:?} must start with '/' and not end with one")]
    BadApiPrefix(String),

    #[error("unknown log level {0:?} (expected one of trace, debug, info, warn, error)")]
    UnknownLogLevel(String),
}

/// Validate settings, collecting every violation.
pub fn validate_settings(settings: &AppSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if settings.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if !settings.api_prefix.starts_with('/') || settings.api_prefix.ends_with('/') {
        errors.push(ValidationError::BadApiPrefix(settings.api_prefix.clone()));
    }

    if !LOG_LEVELS.contains(&settings.logging.level.to_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(settings.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_valid() {
        assert!(validate_settings(&AppSettings::default()).is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let settings = AppSettings {
            port: 0,
            ..AppSettings::default()
        };
        let errors = validate_settings(&settings).unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroPort));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut settings = AppSettings {
            host: "  ".to_string(),
            port: 0,
            api_prefix: "v1/".to_string(),
            ..AppSettings::default()
        };
        settings.logging.level = "loud".to_string();

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut settings = AppSettings::default();
        settings.logging.level = "DEBUG".to_string();
        assert!(validate_settings(&settings).is_ok());
    }
}
