//! Configured tokenize-stem-vectorize pipeline.

use crate::bow::{bag_of_words, bag_of_words_batch, Vocabulary, MIN_SENTENCES_FOR_PARALLEL};
use crate::config::Config;
use crate::stem::{PorterStemmer, Stemmer};
use crate::text::Tokenizer;
use log::debug;
use ndarray::{Array1, Array2};
use rayon::prelude::*;

/// Tokenizer and stemmer built once from a [`Config`] and reused for every
/// sentence.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    tokenizer: Tokenizer,
    stemmer: PorterStemmer,
}

impl Preprocessor {
    /// Creates a preprocessor from configuration.
    pub fn new(config: &Config) -> Self {
        debug!(
            "Creating preprocessor: stemmer mode {:?}, split_contractions={}",
            config.stemmer.mode, config.tokenizer.split_contractions
        );
        Self {
            tokenizer: Tokenizer::new(config.tokenizer.clone()),
            stemmer: PorterStemmer::from_config(&config.stemmer),
        }
    }

    /// Returns the tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Returns the stemmer.
    pub fn stemmer(&self) -> &PorterStemmer {
        &self.stemmer
    }

    /// Splits a sentence into token strings.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        self.tokenizer.tokenize_to_strings(sentence)
    }

    /// Reduces a word to its stem.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Builds the feature vector of an already tokenized sentence.
    pub fn bag_of_words<T, W>(&self, tokenized_sentence: &[T], words: &[W]) -> Array1<f32>
    where
        T: AsRef<str>,
        W: AsRef<str>,
    {
        bag_of_words(&self.stemmer, tokenized_sentence, words)
    }

    /// Tokenizes a raw sentence and builds its feature vector.
    pub fn featurize(&self, sentence: &str, vocabulary: &Vocabulary) -> Array1<f32> {
        let tokens = self.tokenize(sentence);
        self.bag_of_words(&tokens, vocabulary.as_slice())
    }

    /// Tokenizes raw sentences and builds a `(sentences, features)` matrix.
    pub fn featurize_batch<T>(&self, sentences: &[T], vocabulary: &Vocabulary) -> Array2<f32>
    where
        T: AsRef<str> + Sync,
    {
        let tokenized: Vec<Vec<String>> = if sentences.len() >= MIN_SENTENCES_FOR_PARALLEL {
            sentences
                .par_iter()
                .map(|sentence| self.tokenize(sentence.as_ref()))
                .collect()
        } else {
            sentences
                .iter()
                .map(|sentence| self.tokenize(sentence.as_ref()))
                .collect()
        };
        bag_of_words_batch(&self.stemmer, &tokenized, vocabulary.as_slice())
    }
}
