//! Bag-of-words feature vectors.
//!
//! A feature vector has one entry per vocabulary word, in vocabulary order.
//! Entry `i` is `1.0` when vocabulary word `i` appears among the stemmed
//! tokens of the sentence and `0.0` otherwise. Only presence is recorded,
//! never counts.

mod vectorizer;
mod vocabulary;

pub use vectorizer::BagOfWords;
pub use vocabulary::Vocabulary;

use crate::stem::Stemmer;
use log::debug;
use ndarray::{Array1, Array2, ArrayViewMut1, Axis};
use rayon::prelude::*;
use std::collections::HashSet;

/// Minimum number of sentences before rows are computed in parallel.
pub(crate) const MIN_SENTENCES_FOR_PARALLEL: usize = 100;

/// Builds the feature vector of one tokenized sentence.
///
/// Tokens are raw tokenizer output and are stemmed here; `words` must
/// already be stemmed. The result always has `words.len()` entries.
pub fn bag_of_words<S, T, W>(stemmer: &S, tokenized_sentence: &[T], words: &[W]) -> Array1<f32>
where
    S: Stemmer + ?Sized,
    T: AsRef<str>,
    W: AsRef<str>,
{
    let sentence_words = stemmed_set(stemmer, tokenized_sentence);
    let mut bag = Array1::<f32>::zeros(words.len());
    mark_present(bag.view_mut(), &sentence_words, words);
    bag
}

/// Builds one feature row per tokenized sentence.
///
/// Large batches are spread across the rayon thread pool.
pub fn bag_of_words_batch<S, V, T, W>(stemmer: &S, sentences: &[V], words: &[W]) -> Array2<f32>
where
    S: Stemmer + Sync + ?Sized,
    V: AsRef<[T]> + Sync,
    T: AsRef<str>,
    W: AsRef<str> + Sync,
{
    let mut bags = Array2::<f32>::zeros((sentences.len(), words.len()));
    let fill = |row: ArrayViewMut1<'_, f32>, tokens: &V| {
        let sentence_words = stemmed_set(stemmer, tokens.as_ref());
        mark_present(row, &sentence_words, words);
    };

    if sentences.len() >= MIN_SENTENCES_FOR_PARALLEL {
        debug!(
            "Vectorizing {} sentences over {} features in parallel",
            sentences.len(),
            words.len()
        );
        bags.axis_iter_mut(Axis(0))
            .into_par_iter()
            .zip(sentences.par_iter())
            .for_each(|(row, tokens)| fill(row, tokens));
    } else {
        debug!(
            "Vectorizing {} sentences over {} features",
            sentences.len(),
            words.len()
        );
        for (row, tokens) in bags.axis_iter_mut(Axis(0)).zip(sentences) {
            fill(row, tokens);
        }
    }

    bags
}

fn stemmed_set<S, T>(stemmer: &S, tokens: &[T]) -> HashSet<String>
where
    S: Stemmer + ?Sized,
    T: AsRef<str>,
{
    tokens.iter().map(|t| stemmer.stem(t.as_ref())).collect()
}

fn mark_present<W: AsRef<str>>(
    mut bag: ArrayViewMut1<'_, f32>,
    sentence_words: &HashSet<String>,
    words: &[W],
) {
    for (idx, word) in words.iter().enumerate() {
        if sentence_words.contains(word.as_ref()) {
            bag[idx] = 1.0;
        }
    }
}
