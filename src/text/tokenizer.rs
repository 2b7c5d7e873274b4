//! Word-boundary tokenization.

use crate::config::TokenizerConfig;
use crate::text::contractions;
use crate::text::Normalizer;
use log::trace;
use unicode_segmentation::UnicodeSegmentation;

/// A token with its position in the (normalized) input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, exactly as it appears in the input.
    pub text: String,
    /// Start position in the text (byte offset).
    pub start: usize,
    /// End position in the text (byte offset).
    pub end: usize,
    /// Token index in the sequence.
    pub index: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(text: String, start: usize, end: usize, index: usize) -> Self {
        Self {
            text,
            start,
            end,
            index,
        }
    }
}

/// Tokenizer that splits text on Unicode word boundaries (UAX #29).
///
/// Whitespace separates tokens and is dropped. Each punctuation mark becomes
/// its own token, numbers such as `3.14` stay whole, and English clitics are
/// split off their host word. Treebank conventions are kept on top of the
/// word boundaries: hyphenated words (`e-mail`), clock times (`3:30pm`),
/// ellipses (`...`) and dotted abbreviations inside a sentence (`U.S.`)
/// stay whole. No case folding is done here.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    normalizer: Normalizer,
    split_contractions: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            split_contractions: config.split_contractions,
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TokenizerConfig::default())
    }

    /// Tokenizes text into a sequence of tokens.
    ///
    /// With Unicode normalization enabled, offsets refer to the normalized
    /// text.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let text = self.normalizer.normalize_text(text);
        let mut tokens = Vec::new();

        for (start, segment) in join_segments(&text) {
            if !self.normalizer.keep_token(segment) {
                continue;
            }

            if self.split_contractions {
                for (offset, piece) in contractions::split(segment) {
                    let piece_start = start + offset;
                    let index = tokens.len();
                    tokens.push(Token::new(
                        piece.to_string(),
                        piece_start,
                        piece_start + piece.len(),
                        index,
                    ));
                }
            } else {
                let index = tokens.len();
                tokens.push(Token::new(
                    segment.to_string(),
                    start,
                    start + segment.len(),
                    index,
                ));
            }
        }

        trace!("Tokenized {} bytes into {} tokens", text.len(), tokens.len());
        tokens
    }

    /// Tokenizes text and returns only the token strings.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}

/// Splits text on word boundaries, then re-joins segments the Treebank
/// conventions keep together. Returned slices are contiguous and cover the
/// whole text.
fn join_segments(text: &str) -> Vec<(usize, &str)> {
    let segments: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut spans: Vec<(usize, usize)> = Vec::with_capacity(segments.len());

    let mut i = 0;
    while i < segments.len() {
        let (start, segment) = segments[i];
        let end = start + segment.len();

        if let Some(last) = spans.last_mut() {
            let previous = &text[last.0..last.1];
            let next = segments.get(i + 1).map(|&(_, s)| s);

            if let Some(next) = next.filter(|next| joins_across(previous, segment, next)) {
                last.1 = end + next.len();
                i += 2;
                continue;
            }
            if segment == "." && joins_period(previous, &text[end..]) {
                last.1 = end;
                i += 1;
                continue;
            }
        }

        spans.push((start, end));
        i += 1;
    }

    spans
        .into_iter()
        .map(|(start, end)| (start, &text[start..end]))
        .collect()
}

/// `e` `-` `mail` and `3` `:` `30pm` form single tokens.
fn joins_across(previous: &str, connector: &str, next: &str) -> bool {
    let ends_alphanumeric = previous.chars().last().is_some_and(char::is_alphanumeric);
    let first = next.chars().next();
    match connector {
        "-" => ends_alphanumeric && first.is_some_and(char::is_alphanumeric),
        ":" => ends_alphanumeric && first.is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// A period extends a run of periods, or a dotted abbreviation unless it
/// ends the text.
fn joins_period(previous: &str, rest: &str) -> bool {
    if previous.chars().all(|c| c == '.') {
        return true;
    }
    let abbreviation = previous.contains('.')
        && previous.chars().all(|c| c == '.' || c.is_alphabetic());
    abbreviation && !rest.trim().is_empty()
}
