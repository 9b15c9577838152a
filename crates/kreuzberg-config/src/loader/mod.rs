//! Config discovery and loading.
//!
//! Locates a `kreuzberg.*` config file (explicit path, environment override,
//! or ancestor-directory walk), decodes it with the matching format adapter,
//! and validates the tree before handing back a typed `ExtractionConfig`.


use crate::error::{ConfigError, FieldViolation};
use crate::format::{self, ConfigFormat};
use crate::model::ExtractionConfig;
use crate::validate;
use log::{debug, info};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate config filenames probed at each directory level, in precedence
/// order. Sibling candidates at one level are never merged; the first hit wins.
pub const CONFIG_FILE_CANDIDATES: &[&str] = &[
    "kreuzberg.toml",
    "kreuzberg.yaml",
    "kreuzberg.yml",
    "kreuzberg.json",
];

/// Environment variable naming an explicit config file path.
pub const CONFIG_PATH_ENV: &str = "KREUZBERG_CONFIG_PATH";

/// Inputs for config discovery: a start directory and an environment snapshot.
///
/// Tests construct one pointing at a temp directory instead of mutating the
/// process working directory or real environment variables.
#[derive(Debug, Clone)]
pub struct DiscoveryContext {
    /// Directory where the ancestor walk starts.
    pub start_dir: PathBuf,
    /// Explicit config path taken from the environment, if set.
    pub env_override: Option<PathBuf>,
}

impl DiscoveryContext {
    /// Snapshot the current working directory and `KREUZBERG_CONFIG_PATH`.
    pub fn current() -> Result<Self, ConfigError> {
        Ok(Self {
            start_dir: env::current_dir()?,
            env_override: env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
        })
    }

    /// Build a context starting at the given directory, with no override.
    pub fn new(start_dir: impl AsRef<Path>) -> Self {
        Self {
            start_dir: start_dir.as_ref().to_path_buf(),
            env_override: None,
        }
    }

    /// Set the explicit config path normally taken from the environment.
    pub fn with_env_override(mut self, path: impl AsRef<Path>) -> Self {
        self.env_override = Some(path.as_ref().to_path_buf());
        self
    }
}

/// Walk from the start directory to the filesystem root, probing candidate
/// filenames by fixed name at each level.
fn discover_config_file(context: &DiscoveryContext) -> Result<PathBuf, ConfigError> {
    if let Some(path) = &context.env_override {
        debug!("using config path from environment: {}", path.display());
        return Ok(path.clone());
    }
    for dir in context.start_dir.ancestors() {
        for candidate in CONFIG_FILE_CANDIDATES {
            let path = dir.join(candidate);
            if path.is_file() {
                debug!("discovered config file: {}", path.display());
                return Ok(path);
            }
        }
    }
    debug!(
        "no config file found walking up from {}",
        context.start_dir.display()
    );
    Err(ConfigError::NotFound)
}

impl ExtractionConfig {
    /// Load and validate a config file at an explicit path.
    ///
    /// The format is inferred from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading extraction config from {}", path.display());
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::Parse {
            format: "unknown",
            message: format!(
                "unrecognized config extension for {} (expected .toml, .yaml, .yml, or .json)",
                path.display()
            ),
        })?;
        let contents = fs::read_to_string(path)?;
        Self::from_document(&contents, format)
    }

    /// Load and validate a config document already held in memory.
    pub fn from_document(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        debug!(
            "decoding {} config from raw contents (len={})",
            format,
            contents.len()
        );
        let value = format::decode(contents, format)?;
        Self::from_map(value)
    }

    /// Discover a config file using the process working directory and
    /// environment, then load it.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_with(&DiscoveryContext::current()?)
    }

    /// Discover a config file using an explicit context, then load it.
    pub fn discover_with(context: &DiscoveryContext) -> Result<Self, ConfigError> {
        let path = discover_config_file(context)?;
        Self::from_file(path)
    }

    /// Validate a generic value tree and decode it into a typed config.
    ///
    /// Used by bindings that parsed a host-language structure themselves.
    pub fn from_map(value: Value) -> Result<Self, ConfigError> {
        validate::validate_tree(&value)
            .map_err(|violations| ConfigError::Validation { violations })?;
        serde_json::from_value(value.clone()).map_err(|err| ConfigError::Validation {
            violations: vec![FieldViolation {
                path: String::new(),
                rule: err.to_string(),
                value,
            }],
        })
    }

    /// Serialize back into the generic value tree for diagnostics and
    /// round-trip interoperability.
    pub fn to_map(&self) -> Value {
        // Serializing the plain data model cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Re-check every invariant on an already-typed config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate::validate_tree(&self.to_map())
            .map_err(|violations| ConfigError::Validation { violations })
    }

    /// Render this config as document text in the given format.
    pub fn to_document(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        format::encode(&self.to_map(), format)
    }
}
