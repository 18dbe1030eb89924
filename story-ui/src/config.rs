//! Display configuration passed to the loading view at render time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a `DisplayConfiguration` from outside the app.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for this type
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Input of a single render pass.
///
/// `theme` names the theme the story is being generated for. It is optional
/// and never validated; `{}` and `{"theme": null}` both decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfiguration {
    pub theme: Option<String>,
}

impl DisplayConfiguration {
    /// Configuration carrying the given theme label.
    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
        }
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Decode a configuration from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_with_theme() {
        let config = DisplayConfiguration::from_json(r#"{"theme": "ocean"}"#).unwrap();
        assert_eq!(config.theme(), Some("ocean"));
        assert_eq!(config, DisplayConfiguration::with_theme("ocean"));
    }

    #[test]
    fn test_missing_and_null_theme_decode_to_none() {
        let empty = DisplayConfiguration::from_json("{}").unwrap();
        let null = DisplayConfiguration::from_json(r#"{"theme": null}"#).unwrap();
        assert_eq!(empty.theme(), None);
        assert_eq!(empty, null);
        assert_eq!(empty, DisplayConfiguration::default());
    }

    #[test]
    fn test_empty_theme_is_accepted() {
        let config = DisplayConfiguration::from_json(r#"{"theme": ""}"#).unwrap();
        assert_eq!(config.theme(), Some(""));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config =
            DisplayConfiguration::from_json(r#"{"theme": "fantasy", "session": "abc"}"#).unwrap();
        assert_eq!(config.theme(), Some("fantasy"));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = DisplayConfiguration::from_json("{theme:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse configuration"));
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("story-ui-config-does-not-exist.json");
        let err = DisplayConfiguration::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "story-ui-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"theme": "space opera"}"#).unwrap();
        let config = DisplayConfiguration::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.theme(), Some("space opera"));
    }
}
