//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML)
//!     → loader.rs (parse & deserialize)
//!     → env_file.rs (optional KEY=value overrides, merged as data)
//!     → validation.rs (semantic checks)
//!     → AppSettings (validated, immutable)
//!     → shared via Arc with route handlers
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once loaded; errors at load time are fatal
//! - All fields have defaults to allow minimal configs
//! - Unknown config keys are rejected (serde deny_unknown_fields)
//! - Validation separates syntactic (serde) from semantic checks

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, ConfigError};
pub use schema::{AppSettings, LoggingConfig};
