//! # chatprep - text preprocessing for intent classifiers
//!
//! chatprep turns raw chat messages into fixed-length feature vectors for a
//! downstream intent classifier. It provides three stateless operations:
//!
//! - [`tokenize`] splits a sentence into words, punctuation and numbers
//! - [`stem`] case-folds a word and reduces it with the Porter algorithm
//! - [`bag_of_words`] marks which vocabulary words occur in a sentence
//!
//! ## Quick Start
//!
//! ```rust
//! use chatprep::{bag_of_words, tokenize};
//!
//! let tokens = tokenize("How long does shipping take?");
//! assert_eq!(tokens, ["How", "long", "does", "shipping", "take", "?"]);
//!
//! let vocabulary = ["how", "long", "ship", "take", "pay"];
//! let features = bag_of_words(&tokens, &vocabulary);
//! assert_eq!(features.to_vec(), [1.0, 1.0, 1.0, 1.0, 0.0]);
//! ```
//!
//! ## Configured Pipeline
//!
//! ```rust,ignore
//! use chatprep::{Config, Preprocessor, Vocabulary};
//!
//! let config = Config::from_file("chatprep.json")?;
//! let preprocessor = Preprocessor::new(&config);
//!
//! let vocabulary = Vocabulary::new(["hi", "order", "ship", "pay"]);
//! let features = preprocessor.featurize_batch(&messages, &vocabulary);
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Tokenization and normalization
//! - [`stem`] - Porter stemmer and the [`Stemmer`] trait
//! - [`bow`] - Vocabulary and bag-of-words vectors
//! - [`preprocessor`] - Configured end-to-end pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bow;
pub mod config;
pub mod error;
pub mod preprocessor;
pub mod stem;
pub mod text;

// Re-export commonly used types
pub use bow::{BagOfWords, Vocabulary};
pub use config::{Config, StemmerConfig, TokenizerConfig};
pub use error::{ChatprepError, Result};
pub use preprocessor::Preprocessor;
pub use stem::{PorterStemmer, Stemmer, StemmerMode};
pub use text::{Token, Tokenizer};

use ndarray::Array1;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Splits a sentence into an ordered sequence of tokens.
///
/// Uses the default [`Tokenizer`]: Unicode word boundaries, punctuation as
/// separate tokens, English clitics split off. The empty string yields no
/// tokens.
pub fn tokenize(sentence: &str) -> Vec<String> {
    Tokenizer::default_config().tokenize_to_strings(sentence)
}

/// Lower-cases a word and reduces it to its Porter stem.
pub fn stem(word: &str) -> String {
    PorterStemmer::new().stem(word)
}

/// Builds the 0/1 feature vector of a tokenized sentence over `words`.
///
/// Tokens are stemmed with the default [`PorterStemmer`]; `words` are
/// expected to be stemmed already. The result has `words.len()` entries.
pub fn bag_of_words<T, W>(tokenized_sentence: &[T], words: &[W]) -> Array1<f32>
where
    T: AsRef<str>,
    W: AsRef<str>,
{
    bow::bag_of_words(&PorterStemmer::new(), tokenized_sentence, words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_end_to_end() {
        let tokens = tokenize("How long does shipping take?");
        assert_eq!(tokens, vec!["How", "long", "does", "shipping", "take", "?"]);

        let bag = bag_of_words(&tokens, &["how", "long", "ship", "take", "pay"]);
        assert_eq!(bag.to_vec(), vec![1.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_greeting() {
        let bag = bag_of_words(&["hi"], &["hi", "hello", "bye"]);
        assert_eq!(bag.to_vec(), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_stem() {
        assert_eq!(stem("organize"), "organ");
        assert_eq!(stem("organizes"), "organ");
        assert_eq!(stem("ORGANIZES"), "organ");
    }
}
