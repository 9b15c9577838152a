//! Error types for config loading and validation.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Errors returned while discovering, loading, or validating config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Discovery walked to the filesystem root without finding a config file.
    #[error("no kreuzberg configuration file found")]
    NotFound,
    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Parsing a config document failed.
    #[error("failed to parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
    /// One or more fields failed validation.
    #[error("invalid configuration: {}", render_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },
}

/// A single validation failure: which field, which rule, and the value seen.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// Dotted field path, e.g. `chunking.overlap`.
    pub path: String,
    /// The rule that was violated, e.g. `must be < chunk_size`.
    pub rule: String,
    /// The offending value as decoded from the document.
    pub value: Value,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (got {})", self.path, self.rule, self.value)
    }
}

/// Join violations into a single printable line for `Display`.
fn render_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|violation| violation.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
