//! Configuration for the chatprep preprocessing pipeline.

use crate::error::{ChatprepError, Result};
use crate::stem::StemmerMode;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration for the preprocessing pipeline.
///
/// Every field has a default, so a configuration file only needs to name
/// the settings it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tokenizer configuration.
    pub tokenizer: TokenizerConfig,

    /// Stemmer configuration.
    pub stemmer: StemmerConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Err(ChatprepError::Config(
                "configuration document is empty".to_string(),
            ));
        }
        let config: Config = serde_json::from_str(json)?;
        debug!(
            "Parsed config: split_contractions={}, stemmer mode={:?}",
            config.tokenizer.split_contractions, config.stemmer.mode
        );
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ChatprepError::FileNotFound(path.to_path_buf()));
        }

        debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Split English clitics off their host word (`don't` -> `do`, `n't`).
    /// Default: true.
    pub split_contractions: bool,

    /// Apply Unicode NFC normalization before segmenting.
    /// Default: false.
    pub unicode_normalize: bool,

    /// Emit tokens made only of punctuation or symbols.
    /// Default: true.
    pub keep_punctuation: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            split_contractions: true,
            unicode_normalize: false,
            keep_punctuation: true,
        }
    }
}

/// Stemmer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Which variant of the Porter algorithm to run.
    /// Default: NLTK extensions.
    pub mode: StemmerMode,

    /// Lower-case words before stemming.
    /// Default: true.
    pub lowercase: bool,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            mode: StemmerMode::default(),
            lowercase: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tokenizer.split_contractions);
        assert!(!config.tokenizer.unicode_normalize);
        assert!(config.tokenizer.keep_punctuation);
        assert_eq!(config.stemmer.mode, StemmerMode::NltkExtensions);
        assert!(config.stemmer.lowercase);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            Config::from_json_str(r#"{"stemmer": {"mode": "original_algorithm"}}"#).unwrap();
        assert_eq!(config.stemmer.mode, StemmerMode::OriginalAlgorithm);
        assert!(config.stemmer.lowercase);
        assert_eq!(config.tokenizer, TokenizerConfig::default());
    }

    #[test]
    fn test_empty_document_rejected() {
        let err = Config::from_json_str("   \n").unwrap_err();
        assert!(matches!(err, ChatprepError::Config(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Config::from_json_str("{ tokenizer: ").unwrap_err();
        assert!(matches!(err, ChatprepError::Serialization(_)));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = Config::from_json_str(r#"{"stemmer": {"mode": "snowball"}}"#).unwrap_err();
        assert!(matches!(err, ChatprepError::Serialization(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = Config::default();
        config.tokenizer.split_contractions = false;
        config.stemmer.mode = StemmerMode::MartinExtensions;

        let json = config.to_json_string().unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/definitely/not/here/chatprep.json").unwrap_err();
        assert!(matches!(err, ChatprepError::FileNotFound(_)));
    }
}
