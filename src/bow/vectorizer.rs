//! Bag-of-words vectorizer bound to a fixed vocabulary.

use crate::bow::{bag_of_words, bag_of_words_batch, Vocabulary};
use crate::stem::{PorterStemmer, Stemmer};
use ndarray::{Array1, Array2};

/// Vectorizer that maps tokenized sentences onto a fixed vocabulary.
///
/// The stemmer is held by value and used for every sentence, so the
/// vectorizer is as thread-safe as the stemmer it wraps.
#[derive(Debug, Clone)]
pub struct BagOfWords<S = PorterStemmer> {
    vocabulary: Vocabulary,
    stemmer: S,
}

impl BagOfWords<PorterStemmer> {
    /// Creates a vectorizer using the default Porter stemmer.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_stemmer(vocabulary, PorterStemmer::new())
    }
}

impl<S: Stemmer> BagOfWords<S> {
    /// Creates a vectorizer with a custom stemmer.
    pub fn with_stemmer(vocabulary: Vocabulary, stemmer: S) -> Self {
        Self {
            vocabulary,
            stemmer,
        }
    }

    /// Number of features, equal to the vocabulary length.
    pub fn num_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Returns the vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the stemmer.
    pub fn stemmer(&self) -> &S {
        &self.stemmer
    }

    /// Builds the feature vector of one tokenized sentence.
    pub fn transform<T: AsRef<str>>(&self, tokenized_sentence: &[T]) -> Array1<f32> {
        bag_of_words(&self.stemmer, tokenized_sentence, self.vocabulary.as_slice())
    }

    /// Returns the vocabulary words present in a tokenized sentence, in
    /// vocabulary order.
    pub fn present_words<T: AsRef<str>>(&self, tokenized_sentence: &[T]) -> Vec<&str> {
        self.transform(tokenized_sentence)
            .iter()
            .zip(self.vocabulary.iter())
            .filter(|(value, _)| **value > 0.0)
            .map(|(_, word)| word)
            .collect()
    }
}

impl<S: Stemmer + Sync> BagOfWords<S> {
    /// Builds a `(sentences, features)` matrix, one row per sentence.
    pub fn transform_batch<V, T>(&self, sentences: &[V]) -> Array2<f32>
    where
        V: AsRef<[T]> + Sync,
        T: AsRef<str>,
    {
        bag_of_words_batch(&self.stemmer, sentences, self.vocabulary.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::StemmerMode;

    fn shop_vocabulary() -> Vocabulary {
        Vocabulary::new(["how", "long", "ship", "take", "pay"])
    }

    #[test]
    fn test_transform() {
        let vectorizer = BagOfWords::new(shop_vocabulary());
        assert_eq!(vectorizer.num_features(), 5);

        let bag = vectorizer.transform(&["How", "long", "does", "shipping", "take", "?"]);
        assert_eq!(bag.to_vec(), vec![1.0, 1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_present_words() {
        let vectorizer = BagOfWords::new(shop_vocabulary());
        let present = vectorizer.present_words(&["Can", "I", "pay", "for", "shipping"]);
        assert_eq!(present, vec!["ship", "pay"]);
    }

    #[test]
    fn test_custom_stemmer() {
        let vocabulary = Vocabulary::new(["enjoi", "enjoy"]);
        let original = BagOfWords::with_stemmer(
            vocabulary.clone(),
            PorterStemmer::with_mode(StemmerMode::OriginalAlgorithm),
        );
        let nltk = BagOfWords::new(vocabulary);

        assert_eq!(original.transform(&["enjoy"]).to_vec(), vec![1.0, 0.0]);
        assert_eq!(nltk.transform(&["enjoy"]).to_vec(), vec![0.0, 1.0]);
        assert_eq!(original.stemmer().mode(), StemmerMode::OriginalAlgorithm);
    }

    #[test]
    fn test_transform_batch() {
        let vectorizer = BagOfWords::new(shop_vocabulary());
        let sentences = vec![
            vec!["how", "long"],
            vec!["paying", "now"],
        ];
        let bags = vectorizer.transform_batch(&sentences);
        assert_eq!(bags.shape(), &[2, 5]);
        assert_eq!(bags.row(1).to_vec(), vec![0.0, 0.0, 0.0, 0.0, 1.0]);
    }
}
