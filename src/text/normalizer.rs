//! Text normalization applied around tokenization.

use crate::config::TokenizerConfig;
use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Normalizer for raw input text and token filtering.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TokenizerConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TokenizerConfig::default())
    }

    /// Applies Unicode NFC normalization when enabled.
    ///
    /// Borrows the input when it is already normalized or normalization is
    /// disabled.
    pub fn normalize_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.config.unicode_normalize || is_nfc_quick(text.chars()) == IsNormalized::Yes {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.nfc().collect())
    }

    /// Returns `true` if the token should be emitted.
    pub fn keep_token(&self, token: &str) -> bool {
        if token.is_empty() || token.chars().all(char::is_whitespace) {
            return false;
        }
        self.config.keep_punctuation || !is_punctuation(token)
    }
}

/// Returns `true` for tokens made only of punctuation or symbols.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
