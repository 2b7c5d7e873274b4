//! Text processing module for tokenization and normalization.

mod contractions;
mod normalizer;
mod tokenizer;

pub use normalizer::{is_punctuation, Normalizer};
pub use tokenizer::{Token, Tokenizer};
