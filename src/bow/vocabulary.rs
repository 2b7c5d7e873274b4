//! Ordered reference vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Index;

/// Ordered sequence of stemmed words defining feature-vector dimensions.
///
/// The vocabulary is supplied by the caller and kept exactly as given:
/// order is preserved and duplicate entries are not removed, so index `i`
/// of a feature vector always refers to entry `i` here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Creates a vocabulary from already-stemmed words, in order.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of entries, which is also the feature-vector length.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the vocabulary has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at a feature index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Returns the first feature index of a word.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Returns true if the word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Returns true if any word occurs more than once.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.words.len());
        !self.words.iter().all(|w| seen.insert(w.as_str()))
    }

    /// Iterates over the words in feature order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the words as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Consumes the vocabulary, returning the words.
    pub fn into_inner(self) -> Vec<String> {
        self.words
    }
}

impl Index<usize> for Vocabulary {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl AsRef<[String]> for Vocabulary {
    fn as_ref(&self) -> &[String] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let vocab = Vocabulary::new(["how", "long", "ship"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.get(0), Some("how"));
        assert_eq!(&vocab[2], "ship");
        assert_eq!(vocab.get(3), None);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["how", "long", "ship"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let vocab: Vocabulary = ["hi", "bye", "hi"].into_iter().collect();
        assert_eq!(vocab.len(), 3);
        assert!(vocab.has_duplicates());
        assert_eq!(vocab.position("hi"), Some(0));
        assert!(!Vocabulary::new(["a", "b"]).has_duplicates());
    }

    #[test]
    fn test_empty() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_empty());
        assert!(!vocab.contains("anything"));
        assert!(!vocab.has_duplicates());
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let vocab = Vocabulary::new(["pay", "ship"]);
        let json = serde_json::to_string(&vocab).unwrap();
        assert_eq!(json, r#"["pay","ship"]"#);
        let back: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);
    }
}
