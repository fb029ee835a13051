//! Abbreviation dictionary for sentence boundary detection.
//!
//! Only abbreviations that are almost never the last word of a sentence are
//! listed. Entries such as "etc", "no" or "sat" would turn ordinary sentence
//! ends into false non-boundaries.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Abbreviations whose trailing period never ends a sentence.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "mx", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "mmes", "msgr",
        "hon", "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen",
        "rep", "gov", "pres", "st",
    ]);

    // Latin and reference abbreviations that introduce more text
    set.extend(["vs", "cf", "viz", "al", "approx", "fig", "eq", "vol", "pp"]);

    set
});

/// Dotted initialisms: `U.S`, `e.g`, `i.e`, `a.m` (trailing period removed).
static INITIALISM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\p{L}\.)+\p{L}$").expect("valid regex"));

/// Check if a word (without its trailing period) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    ABBREVIATIONS.contains(word_lower.trim_matches('.'))
}

/// Check if a token is a single uppercase initial such as `J` in `J. Smith`.
pub fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// Check if a token is a dotted initialism such as `U.S` or `e.g`.
pub fn is_initialism(word: &str) -> bool {
    INITIALISM_PATTERN.is_match(word)
}

/// Check if text ending just before a period ends with an abbreviation.
///
/// `text` is everything preceding the period. The last whitespace-delimited
/// token is inspected after stripping leading punctuation such as `(` or `"`.
pub fn ends_with_abbreviation(text: &str) -> bool {
    let Some(token) = text.split_whitespace().next_back() else {
        return false;
    };
    let token = token.trim_start_matches(|c: char| !c.is_alphanumeric());
    if token.is_empty() {
        return false;
    }

    is_initial(token) || is_initialism(token) || is_abbreviation(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_abbreviations() {
        assert!(is_abbreviation("dr"));
        assert!(is_abbreviation("Dr"));
        assert!(is_abbreviation("Mr"));
        assert!(is_abbreviation("mrs"));
        assert!(is_abbreviation("vs"));
    }

    #[test]
    fn sentence_final_words_are_not_abbreviations() {
        assert!(!is_abbreviation("sat"));
        assert!(!is_abbreviation("etc"));
        assert!(!is_abbreviation("no"));
        assert!(!is_abbreviation("home"));
    }

    #[test]
    fn initials() {
        assert!(is_initial("J"));
        assert!(!is_initial("j"));
        assert!(!is_initial("Jo"));
        assert!(!is_initial(""));
    }

    #[test]
    fn initialisms() {
        assert!(is_initialism("U.S"));
        assert!(is_initialism("e.g"));
        assert!(is_initialism("i.e"));
        assert!(!is_initialism("hello"));
        assert!(!is_initialism("3.14"));
    }

    #[test]
    fn ends_with_abbreviation_works() {
        assert!(ends_with_abbreviation("Mr"));
        assert!(ends_with_abbreviation("They met (Dr"));
        assert!(ends_with_abbreviation("written by J"));
        assert!(ends_with_abbreviation("in the U.S"));
        assert!(!ends_with_abbreviation("The cat sat"));
        assert!(!ends_with_abbreviation(""));
        assert!(!ends_with_abbreviation("wait --"));
    }
}
