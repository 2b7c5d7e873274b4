//! Splitting of English clitics and fused forms.
//!
//! Follows the Penn Treebank conventions: `don't` -> `do` + `n't`,
//! `we'll` -> `we` + `'ll`, `cannot` -> `can` + `not`.

use once_cell::sync::Lazy;
use regex::Regex;

static CLITIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?P<host>.+?)(?:n['’]t|['’](?:s|m|d|ll|re|ve))$").unwrap()
});

static FUSED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(can)not|(gim)me|(gon)na|(got)ta|(lem)me|(wan)na|(d)['’]ye|(more)['’]n)$",
    )
    .unwrap()
});

/// Returns the byte offset at which `word` splits into host and clitic,
/// or `None` if it carries no clitic.
pub fn split_point(word: &str) -> Option<usize> {
    if let Some(caps) = FUSED.captures(word) {
        return caps.iter().skip(1).flatten().next().map(|m| m.end());
    }
    CLITIC
        .captures(word)
        .and_then(|caps| caps.name("host"))
        .map(|m| m.end())
}

/// Splits `word` into its parts with their byte offsets inside `word`.
pub fn split(word: &str) -> Vec<(usize, &str)> {
    match split_point(word) {
        Some(at) => vec![(0, &word[..at]), (at, &word[at..])],
        None => vec![(0, word)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(word: &str) -> Vec<&str> {
        split(word).into_iter().map(|(_, p)| p).collect()
    }

    #[test]
    fn test_negations() {
        assert_eq!(parts("don't"), vec!["do", "n't"]);
        assert_eq!(parts("can't"), vec!["ca", "n't"]);
        assert_eq!(parts("won't"), vec!["wo", "n't"]);
        assert_eq!(parts("ISN'T"), vec!["IS", "N'T"]);
    }

    #[test]
    fn test_clitics() {
        assert_eq!(parts("I'm"), vec!["I", "'m"]);
        assert_eq!(parts("it's"), vec!["it", "'s"]);
        assert_eq!(parts("we'll"), vec!["we", "'ll"]);
        assert_eq!(parts("they're"), vec!["they", "'re"]);
        assert_eq!(parts("you've"), vec!["you", "'ve"]);
        assert_eq!(parts("she'd"), vec!["she", "'d"]);
        assert_eq!(parts("it’s"), vec!["it", "’s"]);
    }

    #[test]
    fn test_fused_forms() {
        assert_eq!(parts("cannot"), vec!["can", "not"]);
        assert_eq!(parts("Gonna"), vec!["Gon", "na"]);
        assert_eq!(parts("wanna"), vec!["wan", "na"]);
        assert_eq!(parts("gimme"), vec!["gim", "me"]);
        assert_eq!(parts("d'ye"), vec!["d", "'ye"]);
    }

    #[test]
    fn test_plain_words_untouched() {
        assert_eq!(parts("shipping"), vec!["shipping"]);
        assert_eq!(parts("n't"), vec!["n't"]);
        assert_eq!(parts("'s"), vec!["'s"]);
        assert_eq!(parts("rock'n'roll"), vec!["rock'n'roll"]);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(split("don't"), vec![(0, "do"), (2, "n't")]);
    }
}
