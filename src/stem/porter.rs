//! The Porter suffix-stripping stemmer.
//!
//! Porter, M.F. (1980). "An algorithm for suffix stripping."
//! Program, 14(3), 130-137.
//!
//! Words are processed as `char` sequences so that measures and
//! consonant tests count code points, not bytes. All suffixes are ASCII.

use crate::config::StemmerConfig;
use crate::stem::{Stemmer, StemmerMode};

/// Irregular forms short-circuited in [`StemmerMode::NltkExtensions`].
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

/// Condition a stem must satisfy for a suffix rule to fire.
#[derive(Debug, Clone, Copy)]
enum Condition {
    Always,
    /// m > 0
    PositiveMeasure,
    /// m > 1
    MeasureAboveOne,
    /// m > 1 and the stem ends in `s` or `t`
    IonStem,
    /// the stem contains a vowel
    ContainsVowel,
    /// the stem is longer than one letter and ends in a consonant
    ConsonantEnding,
    /// m > 0 measured on the word minus `ogi`, keeping the `l` with the stem
    LogiStem,
    /// m > 1 measured on the word minus its final letter
    DoubleLStem,
}

impl Condition {
    fn holds(self, stem: &[char], word: &[char]) -> bool {
        match self {
            Condition::Always => true,
            Condition::PositiveMeasure => measure(stem) > 0,
            Condition::MeasureAboveOne => measure(stem) > 1,
            Condition::IonStem => {
                measure(stem) > 1 && matches!(stem.last(), Some('s') | Some('t'))
            }
            Condition::ContainsVowel => contains_vowel(stem),
            Condition::ConsonantEnding => stem.len() > 1 && is_consonant(stem, stem.len() - 1),
            Condition::LogiStem => measure(&word[..word.len() - 3]) > 0,
            Condition::DoubleLStem => measure(&word[..word.len() - 1]) > 1,
        }
    }
}

/// A suffix, its replacement and the condition on the remaining stem.
type Rule = (&'static str, &'static str, Condition);

const STEP1A_RULES: &[Rule] = &[
    ("sses", "ss", Condition::Always),
    ("ies", "i", Condition::Always),
    ("ss", "ss", Condition::Always),
    ("s", "", Condition::Always),
];

const STEP2_HEAD: &[Rule] = &[
    ("ational", "ate", Condition::PositiveMeasure),
    ("tional", "tion", Condition::PositiveMeasure),
    ("enci", "ence", Condition::PositiveMeasure),
    ("anci", "ance", Condition::PositiveMeasure),
    ("izer", "ize", Condition::PositiveMeasure),
];

const STEP2_TAIL: &[Rule] = &[
    ("alli", "al", Condition::PositiveMeasure),
    ("entli", "ent", Condition::PositiveMeasure),
    ("eli", "e", Condition::PositiveMeasure),
    ("ousli", "ous", Condition::PositiveMeasure),
    ("ization", "ize", Condition::PositiveMeasure),
    ("ation", "ate", Condition::PositiveMeasure),
    ("ator", "ate", Condition::PositiveMeasure),
    ("alism", "al", Condition::PositiveMeasure),
    ("iveness", "ive", Condition::PositiveMeasure),
    ("fulness", "ful", Condition::PositiveMeasure),
    ("ousness", "ous", Condition::PositiveMeasure),
    ("aliti", "al", Condition::PositiveMeasure),
    ("iviti", "ive", Condition::PositiveMeasure),
    ("biliti", "ble", Condition::PositiveMeasure),
];

const STEP3_RULES: &[Rule] = &[
    ("icate", "ic", Condition::PositiveMeasure),
    ("ative", "", Condition::PositiveMeasure),
    ("alize", "al", Condition::PositiveMeasure),
    ("iciti", "ic", Condition::PositiveMeasure),
    ("ical", "ic", Condition::PositiveMeasure),
    ("ful", "", Condition::PositiveMeasure),
    ("ness", "", Condition::PositiveMeasure),
];

const STEP4_RULES: &[Rule] = &[
    ("al", "", Condition::MeasureAboveOne),
    ("ance", "", Condition::MeasureAboveOne),
    ("ence", "", Condition::MeasureAboveOne),
    ("er", "", Condition::MeasureAboveOne),
    ("ic", "", Condition::MeasureAboveOne),
    ("able", "", Condition::MeasureAboveOne),
    ("ible", "", Condition::MeasureAboveOne),
    ("ant", "", Condition::MeasureAboveOne),
    ("ement", "", Condition::MeasureAboveOne),
    ("ment", "", Condition::MeasureAboveOne),
    ("ent", "", Condition::MeasureAboveOne),
    ("ion", "", Condition::IonStem),
    ("ou", "", Condition::MeasureAboveOne),
    ("ism", "", Condition::MeasureAboveOne),
    ("ate", "", Condition::MeasureAboveOne),
    ("iti", "", Condition::MeasureAboveOne),
    ("ous", "", Condition::MeasureAboveOne),
    ("ive", "", Condition::MeasureAboveOne),
    ("ize", "", Condition::MeasureAboveOne),
];

const STEP5B_RULES: &[Rule] = &[("ll", "l", Condition::DoubleLStem)];

/// Porter stemmer.
///
/// The stemmer is a plain value with no interior state, so one instance can
/// be shared freely across threads or rebuilt per call with identical
/// results.
///
/// ```
/// use chatprep::{PorterStemmer, Stemmer};
///
/// let stemmer = PorterStemmer::new();
/// assert_eq!(stemmer.stem("Shipping"), "ship");
/// assert_eq!(stemmer.stem("organizes"), "organ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PorterStemmer {
    mode: StemmerMode,
    lowercase: bool,
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl PorterStemmer {
    /// Creates a lower-casing stemmer in [`StemmerMode::NltkExtensions`].
    pub fn new() -> Self {
        Self::with_mode(StemmerMode::default())
    }

    /// Creates a lower-casing stemmer running the given variant.
    pub fn with_mode(mode: StemmerMode) -> Self {
        Self {
            mode,
            lowercase: true,
        }
    }

    /// Creates a stemmer from configuration.
    pub fn from_config(config: &StemmerConfig) -> Self {
        Self {
            mode: config.mode,
            lowercase: config.lowercase,
        }
    }

    /// Returns the algorithm variant.
    pub fn mode(&self) -> StemmerMode {
        self.mode
    }

    /// Returns whether input is lower-cased before stemming.
    pub fn lowercases(&self) -> bool {
        self.lowercase
    }

    fn is_nltk(&self) -> bool {
        self.mode == StemmerMode::NltkExtensions
    }

    /// *o: the stem ends consonant-vowel-consonant, where the final
    /// consonant is not `w`, `x` or `y`.
    fn ends_cvc(&self, word: &[char]) -> bool {
        let n = word.len();
        let classic = n >= 3
            && is_consonant(word, n - 3)
            && !is_consonant(word, n - 2)
            && is_consonant(word, n - 1)
            && !matches!(word[n - 1], 'w' | 'x' | 'y');
        let two_letter = self.is_nltk()
            && n == 2
            && !is_consonant(word, 0)
            && is_consonant(word, 1);
        classic || two_letter
    }

    fn step1a(&self, word: Vec<char>) -> Vec<char> {
        // 'flies' -> 'fli' but 'dies' -> 'die'
        if self.is_nltk() && word.len() == 4 && ends_with(&word, "ies") {
            return replace_suffix(&word, "ies", "ie");
        }
        apply_rules(word, STEP1A_RULES)
    }

    fn step1b(&self, word: Vec<char>) -> Vec<char> {
        // 'spied' -> 'spi' but 'died' -> 'die'
        if self.is_nltk() && ends_with(&word, "ied") {
            let replacement = if word.len() == 4 { "ie" } else { "i" };
            return replace_suffix(&word, "ied", replacement);
        }

        if ends_with(&word, "eed") {
            let stem = &word[..word.len() - 3];
            if measure(stem) > 0 {
                return with_suffix(stem, "ee");
            }
            return word;
        }

        let intermediate = ["ed", "ing"].iter().find_map(|suffix| {
            if !ends_with(&word, suffix) {
                return None;
            }
            let stem = &word[..word.len() - suffix.len()];
            contains_vowel(stem).then(|| stem.to_vec())
        });
        let Some(stem) = intermediate else {
            return word;
        };

        if ends_with(&stem, "at") {
            return replace_suffix(&stem, "at", "ate");
        }
        if ends_with(&stem, "bl") {
            return replace_suffix(&stem, "bl", "ble");
        }
        if ends_with(&stem, "iz") {
            return replace_suffix(&stem, "iz", "ize");
        }
        if ends_double_consonant(&stem) {
            let n = stem.len();
            if matches!(stem[n - 1], 'l' | 's' | 'z') {
                return stem;
            }
            return stem[..n - 1].to_vec();
        }
        if measure(&stem) == 1 && self.ends_cvc(&stem) {
            return with_suffix(&stem, "e");
        }
        stem
    }

    fn step1c(&self, word: Vec<char>) -> Vec<char> {
        let condition = if self.is_nltk() {
            Condition::ConsonantEnding
        } else {
            Condition::ContainsVowel
        };
        apply_rules(word, &[("y", "i", condition)])
    }

    fn step2(&self, word: Vec<char>) -> Vec<char> {
        // NLTK applies ALLI -> AL up front and re-runs the step on success.
        if self.is_nltk()
            && ends_with(&word, "alli")
            && measure(&word[..word.len() - 4]) > 0
        {
            return self.step2(replace_suffix(&word, "alli", "al"));
        }

        let bli = if self.mode == StemmerMode::OriginalAlgorithm {
            ("abli", "able", Condition::PositiveMeasure)
        } else {
            ("bli", "ble", Condition::PositiveMeasure)
        };

        let mut rules = Vec::with_capacity(STEP2_HEAD.len() + STEP2_TAIL.len() + 3);
        rules.extend_from_slice(STEP2_HEAD);
        rules.push(bli);
        rules.extend_from_slice(STEP2_TAIL);
        match self.mode {
            StemmerMode::NltkExtensions => {
                rules.push(("fulli", "ful", Condition::PositiveMeasure));
                rules.push(("logi", "log", Condition::LogiStem));
            }
            StemmerMode::MartinExtensions => {
                rules.push(("logi", "log", Condition::PositiveMeasure));
            }
            StemmerMode::OriginalAlgorithm => {}
        }

        apply_rules(word, &rules)
    }

    fn step5a(&self, word: Vec<char>) -> Vec<char> {
        if let Some((&'e', stem)) = word.split_last() {
            let m = measure(stem);
            if m > 1 || (m == 1 && !self.ends_cvc(stem)) {
                return stem.to_vec();
            }
        }
        word
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let prepared = if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };

        if self.is_nltk() {
            if let Some(&(_, irregular)) = IRREGULAR_FORMS
                .iter()
                .find(|(form, _)| *form == prepared)
            {
                return irregular.to_string();
            }
        }

        let chars: Vec<char> = prepared.chars().collect();

        // Strings of one or two letters are left alone outside the original algorithm.
        if self.mode != StemmerMode::OriginalAlgorithm && chars.len() <= 2 {
            return prepared;
        }

        let chars = self.step1a(chars);
        let chars = self.step1b(chars);
        let chars = self.step1c(chars);
        let chars = self.step2(chars);
        let chars = apply_rules(chars, STEP3_RULES);
        let chars = apply_rules(chars, STEP4_RULES);
        let chars = self.step5a(chars);
        let chars = apply_rules(chars, STEP5B_RULES);

        chars.into_iter().collect()
    }
}

/// Applies the first rule whose suffix matches. Once a suffix matches, no
/// later rule is tried even if the condition fails.
fn apply_rules(word: Vec<char>, rules: &[Rule]) -> Vec<char> {
    for &(suffix, replacement, condition) in rules {
        if !ends_with(&word, suffix) {
            continue;
        }
        let stem = &word[..word.len() - suffix.len()];
        if condition.holds(stem, &word) {
            return with_suffix(stem, replacement);
        }
        return word;
    }
    word
}

fn is_vowel_letter(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// A `y` is a consonant at the start of a word or after a vowel, so within a
/// run of `y`s the answer alternates from the first one.
fn is_consonant(word: &[char], i: usize) -> bool {
    match word[i] {
        c if is_vowel_letter(c) => false,
        'y' => {
            let run_start = word[..i]
                .iter()
                .rposition(|&c| c != 'y')
                .map_or(0, |p| p + 1);
            let first = run_start == 0 || is_vowel_letter(word[run_start - 1]);
            if (i - run_start) % 2 == 0 {
                first
            } else {
                !first
            }
        }
        _ => true,
    }
}

/// Consonant flag for every position, computed in one pass.
fn consonants(word: &[char]) -> Vec<bool> {
    let mut mask: Vec<bool> = Vec::with_capacity(word.len());
    for (i, &c) in word.iter().enumerate() {
        let consonant = match c {
            c if is_vowel_letter(c) => false,
            'y' => i == 0 || !mask[i - 1],
            _ => true,
        };
        mask.push(consonant);
    }
    mask
}

/// m in `[C](VC){m}[V]`: the number of vowel-consonant transitions.
fn measure(stem: &[char]) -> usize {
    consonants(stem)
        .windows(2)
        .filter(|pair| !pair[0] && pair[1])
        .count()
}

fn contains_vowel(stem: &[char]) -> bool {
    consonants(stem).iter().any(|&consonant| !consonant)
}

fn ends_double_consonant(word: &[char]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    let n = suffix.len();
    word.len() >= n && word[word.len() - n..].iter().copied().eq(suffix.chars())
}

fn with_suffix(stem: &[char], suffix: &str) -> Vec<char> {
    let mut result = Vec::with_capacity(stem.len() + suffix.len());
    result.extend_from_slice(stem);
    result.extend(suffix.chars());
    result
}

fn replace_suffix(word: &[char], suffix: &str, replacement: &str) -> Vec<char> {
    debug_assert!(ends_with(word, suffix));
    with_suffix(&word[..word.len() - suffix.len()], replacement)
}
