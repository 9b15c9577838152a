//! Configuration schema, discovery, and validation for the Kreuzberg
//! document-extraction engine.
//!
//! This crate owns the canonical `ExtractionConfig` schema shared by every
//! language binding, the TOML/YAML/JSON format adapters, the directory-walk
//! discovery of `kreuzberg.*` files, and the validator that checks every
//! numeric, enum, and cross-field constraint before extraction starts.

mod error;
mod format;
mod loader;
mod model;
mod validate;

/// Public error type returned by config discovery, loading, and validation.
pub use error::{ConfigError, FieldViolation};
/// Supported on-disk config formats.
pub use format::ConfigFormat;
/// Discovery inputs and the probed filename/environment constants.
pub use loader::{CONFIG_FILE_CANDIDATES, CONFIG_PATH_ENV, DiscoveryContext};
/// Configuration schema models.
pub use model::*;
