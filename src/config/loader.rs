//! Settings loading from disk.
//!
//! # Data Flow
//! ```text
//! config file (YAML)
//!     → read + serde_yml deserialize → AppSettings
//! env file (optional, KEY=value lines)
//!     → env_file::parse → override map → applied onto AppSettings
//!     → validation.rs (semantic checks)
//!     → AppSettings (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - A supplied-but-missing env file is fatal; an omitted env file is not
//! - Overrides are merged as data, the process environment is never mutated
//! - All configuration errors are fatal at startup (no live reload)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::env_file::{self, EnvLineError};
use crate::config::schema::AppSettings;
use crate::config::validation::{validate_settings, ValidationError};

/// Env-file keys recognized as settings overrides.
pub const ENV_HOST: &str = "EXEC_AGENT_HOST";
pub const ENV_PORT: &str = "EXEC_AGENT_PORT";
pub const ENV_SERVICE_NAME: &str = "EXEC_AGENT_SERVICE_NAME";
pub const ENV_LOG_LEVEL: &str = "EXEC_AGENT_LOG_LEVEL";

/// Error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed env file {path}: {source}")]
    EnvFormat {
        path: PathBuf,
        #[source]
        source: EnvLineError,
    },

    #[error("invalid override {key}={value:?}: {reason}")]
    BadOverride {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("validation failed: {}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, merge and validate settings.
///
/// Reads the YAML config at `config_path`, then, if `env_path` is given,
/// parses it as `KEY=value` lines and applies the recognized overrides.
pub fn load_settings(
    config_path: &Path,
    env_path: Option<&Path>,
) -> Result<AppSettings, ConfigError> {
    let content = fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    let mut settings: AppSettings =
        serde_yml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;

    if let Some(env_path) = env_path {
        let env_content = fs::read_to_string(env_path).map_err(|source| ConfigError::EnvFile {
            path: env_path.to_path_buf(),
            source,
        })?;
        let vars = env_file::parse(&env_content).map_err(|source| ConfigError::EnvFormat {
            path: env_path.to_path_buf(),
            source,
        })?;
        apply_overrides(&mut settings, &vars)?;
    }

    validate_settings(&settings).map_err(ConfigError::Validation)?;

    Ok(settings)
}

/// Apply recognized env-file overrides onto parsed settings.
///
/// Unrecognized keys are ignored: env files routinely carry variables meant
/// for other processes.
fn apply_overrides(
    settings: &mut AppSettings,
    vars: &BTreeMap<String, String>,
) -> Result<(), ConfigError> {
    if let Some(host) = vars.get(ENV_HOST) {
        settings.host = host.clone();
    }

    if let Some(port) = vars.get(ENV_PORT) {
        settings.port = port.parse().map_err(|e| ConfigError::BadOverride {
            key: ENV_PORT,
            value: port.clone(),
            reason: format!("{e}"),
        })?;
    }

    if let Some(name) = vars.get(ENV_SERVICE_NAME) {
        settings.service_name = name.clone();
    }

    if let Some(level) = vars.get(ENV_LOG_LEVEL) {
        settings.logging.level = level.clone();
    }

    for key in vars.keys() {
        if !matches!(
            key.as_str(),
            ENV_HOST | ENV_PORT | ENV_SERVICE_NAME | ENV_LOG_LEVEL
        ) {
            tracing::debug!(key = %key, "Ignoring unrecognized env-file key");
        }
    }

    Ok(())
}
