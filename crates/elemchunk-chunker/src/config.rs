//! Chunking configuration.
//!
//! A config names the strategy and carries the options for it. Options are
//! kept as an open table: the dispatcher decides which of them the selected
//! strategy reads.
//!
//! ```toml
//! chunking_strategy = "by_title"
//! max_characters = 1000
//! combine_text_under_n_chars = 200
//! ```

use elemchunk_core::{ChunkOptions, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Strategy selection plus its options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Strategy name; `None` disables chunking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunking_strategy: Option<String>,

    /// Every other key
    #[serde(flatten)]
    pub options: ChunkOptions,
}

impl ChunkingConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            _ => Self::from_toml_str(&contents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_has_no_strategy() {
        let config = ChunkingConfig::default();
        assert!(config.chunking_strategy.is_none());
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_from_toml_str() {
        let config = ChunkingConfig::from_toml_str(
            r#"
            chunking_strategy = "by_title"
            max_characters = 1000
            multipage_sections = false
            "#,
        )
        .unwrap();

        assert_eq!(config.chunking_strategy.as_deref(), Some("by_title"));
        assert_eq!(config.options.max_characters().unwrap(), Some(1000));
        assert_eq!(config.options.get_bool("multipage_sections").unwrap(), Some(false));
        assert!(!config.options.contains_key("chunking_strategy"));
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let err = ChunkingConfig::from_toml_str("chunking_strategy = ").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_json_str() {
        let config =
            ChunkingConfig::from_json_str(r#"{"chunking_strategy": "basic", "overlap": 10}"#)
                .unwrap();
        assert_eq!(config.chunking_strategy.as_deref(), Some("basic"));
        assert_eq!(config.options.get_usize("overlap").unwrap(), Some(10));
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = ChunkingConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chunking_strategy = \"basic\"\nmax_characters = 250").unwrap();

        let config = ChunkingConfig::load(file.path()).unwrap();
        assert_eq!(config.chunking_strategy.as_deref(), Some("basic"));
        assert_eq!(config.options.max_characters().unwrap(), Some(250));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"chunking_strategy": "by_title"}}"#).unwrap();

        let config = ChunkingConfig::load(file.path()).unwrap();
        assert_eq!(config.chunking_strategy.as_deref(), Some("by_title"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ChunkingConfig::load(Path::new("/nonexistent/elemchunk.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_serialize_round_trip_to_json() {
        let config = ChunkingConfig {
            chunking_strategy: Some("basic".to_string()),
            options: ChunkOptions::new().with("max_characters", 300),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"chunking_strategy": "basic", "max_characters": 300})
        );
    }
}
