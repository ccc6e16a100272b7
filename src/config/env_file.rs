//! Env-file parsing.
//!
//! # Responsibilities
//! - Parse `KEY=value` lines into an explicit ordered map
//! - Tolerate blank lines, `#` comments and an `export ` prefix
//! - Strip matching single or double quotes around values
//!
//! # Design Decisions
//! - The file is parsed into data, never applied to the process environment;
//!   the loader merges overrides explicitly so tests stay hermetic
//! - A line without `=` is a hard error naming the line number

use std::collections::BTreeMap;

/// A parse failure inside an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLineError {
    /// 1-based line number of the offending line.
    pub line: usize,
    /// The offending content, trimmed.
    pub content: String,
}

impl std::fmt::Display for EnvLineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: expected KEY=value, got {:?}", self.line, self.content)
    }
}

impl std::error::Error for EnvLineError {}

/// Parse env-file content into a key/value map.
///
/// Later occurrences of a key win, matching shell sourcing semantics.
pub fn parse(content: &str) -> Result<BTreeMap<String, String>, EnvLineError> {
    let mut vars = BTreeMap::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line).trim_start();

        let Some((key, value)) = line.split_once('=') else {
            return Err(EnvLineError {
                line: idx + 1,
                content: line.to_string(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(EnvLineError {
                line: idx + 1,
                content: line.to_string(),
            });
        }

        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    Ok(vars)
}

/// Strip one layer of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        let (first, last) = (bytes[0], bytes[value.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
