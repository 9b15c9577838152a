//! Format adapters between on-disk config documents and the generic value tree.
//!
//! All three formats decode into `serde_json::Value` so the validator and the
//! schema model see one representation regardless of the source document.

use crate::ConfigError;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Supported on-disk config formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Infer the format from a file extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }

    /// Lowercase format name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode document text into the generic value tree.
pub(crate) fn decode(contents: &str, format: ConfigFormat) -> Result<Value, ConfigError> {
    match format {
        ConfigFormat::Toml => {
            toml::from_str::<Value>(contents).map_err(|err| parse_error(format, &err))
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).map_err(|err| parse_error(format, &err))
        }
        ConfigFormat::Json => {
            serde_json::from_str::<Value>(contents).map_err(|err| parse_error(format, &err))
        }
    }
}

/// Encode a generic value tree back into document text.
pub(crate) fn encode(value: &Value, format: ConfigFormat) -> Result<String, ConfigError> {
    match format {
        ConfigFormat::Toml => toml::to_string_pretty(value).map_err(|err| parse_error(format, &err)),
        ConfigFormat::Yaml => serde_yaml::to_string(value).map_err(|err| parse_error(format, &err)),
        ConfigFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|err| parse_error(format, &err))
        }
    }
}

/// Build a `Parse` error carrying the format name and one descriptive line.
fn parse_error(format: ConfigFormat, err: &dyn fmt::Display) -> ConfigError {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("malformed document")
        .trim()
        .to_string();
    ConfigError::Parse {
        format: format.name(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn infers_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("kreuzberg.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("kreuzberg.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("kreuzberg.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("kreuzberg.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("kreuzberg.ini")), None);
    }

    #[test]
    fn decode_preserves_integer_float_distinction() {
        let value = decode("[pdf_options]\nrender_quality = 300\n", ConfigFormat::Toml)
            .expect("decode");
        assert!(value["pdf_options"]["render_quality"].is_i64());

        let value = decode(
            "images:\n  preprocessing:\n    bilateral_sigma: 75.5\n",
            ConfigFormat::Yaml,
        )
        .expect("decode");
        assert!(value["images"]["preprocessing"]["bilateral_sigma"].is_f64());
    }

    #[test]
    fn malformed_toml_yields_parse_error() {
        let err = decode("[chunking\nchunk_size = 100", ConfigFormat::Toml).unwrap_err();
        match err {
            ConfigError::Parse { format, message } => {
                assert_eq!(format, "toml");
                assert!(!message.is_empty());
                assert!(!message.contains('\n'));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_yields_parse_error() {
        let err = decode("{ \"chunking\": ", ConfigFormat::Json).unwrap_err();
        match err {
            ConfigError::Parse { format, .. } => assert_eq!(format, "json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn encode_decode_round_trips_scalars() {
        let value = json!({
            "chunking": { "chunk_size": 1000, "overlap": 100 },
            "pages": { "start_page": 1, "extract_text": true },
        });
        for format in [ConfigFormat::Toml, ConfigFormat::Yaml, ConfigFormat::Json] {
            let text = encode(&value, format).expect("encode");
            let decoded = decode(&text, format).expect("decode");
            assert_eq!(decoded, value, "round trip through {format}");
        }
    }
}
