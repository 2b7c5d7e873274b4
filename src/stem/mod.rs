//! Stemming: reducing tokens to a normalized root form.

mod porter;

pub use porter::PorterStemmer;

use serde::{Deserialize, Serialize};

/// Trait for stemming algorithms.
pub trait Stemmer {
    /// Reduces a single word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Stems every token in order.
    fn stem_tokens<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<String>
    where
        Self: Sized,
    {
        tokens.iter().map(|t| self.stem(t.as_ref())).collect()
    }
}

impl<S: Stemmer + ?Sized> Stemmer for &S {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

/// Variant of the Porter algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmerMode {
    /// The algorithm as published in 1980.
    OriginalAlgorithm,
    /// Martin Porter's later corrections to the published algorithm.
    MartinExtensions,
    /// Martin's corrections plus the irregular-forms table and the
    /// short-word rules of the widely used NLTK variant.
    #[default]
    NltkExtensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Stemmer for Upper {
        fn stem(&self, word: &str) -> String {
            word.to_uppercase()
        }
    }

    #[test]
    fn test_stem_tokens_preserves_order() {
        let stemmed = Upper.stem_tokens(&["b", "a", "b"]);
        assert_eq!(stemmed, vec!["B", "A", "B"]);
    }

    fn stem_with<S: Stemmer>(stemmer: S, word: &str) -> String {
        stemmer.stem(word)
    }

    #[test]
    fn test_borrowed_stemmer() {
        let upper = Upper;
        let object: &dyn Stemmer = &upper;
        assert_eq!(stem_with(&upper, "x"), "X");
        assert_eq!(stem_with(object, "y"), "Y");
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&StemmerMode::NltkExtensions).unwrap();
        assert_eq!(json, "\"nltk_extensions\"");
        let mode: StemmerMode = serde_json::from_str("\"martin_extensions\"").unwrap();
        assert_eq!(mode, StemmerMode::MartinExtensions);
    }
}
