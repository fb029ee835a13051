//! Text segmentation.
//!
//! Splits normalized text into paragraphs, sentences, and words. All pieces
//! borrow from the input; nothing is copied.
//!
//! - Paragraphs are separated by one or more blank lines.
//! - A sentence ends at a run of `.`, `?` or `!` followed by whitespace or the
//!   end of the text. A lone `.` after an abbreviation, initial, or dotted
//!   initialism is not a boundary.
//! - Words are whitespace-delimited tokens with leading and trailing
//!   punctuation stripped.

use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::abbreviations::ends_with_abbreviation;

/// Paragraph separator: a line break, optional whitespace, another line break.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// A segmented document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    /// Paragraphs in reading order. Only paragraphs containing words are kept.
    pub paragraphs: Vec<Paragraph<'a>>,
}

/// A paragraph and its sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// Trimmed paragraph text.
    pub text: &'a str,
    /// Sentences containing at least one word.
    pub sentences: Vec<Sentence<'a>>,
}

/// A sentence and its words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Trimmed sentence text including its terminator.
    pub text: &'a str,
    /// Words in original casing, punctuation stripped.
    pub words: Vec<&'a str>,
}

impl<'a> Document<'a> {
    /// Iterate over every sentence in the document.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence<'a>> {
        self.paragraphs.iter().flat_map(|p| p.sentences.iter())
    }
}

/// Segment text into paragraphs, sentences, and words.
///
/// Sentences that contain no words (e.g. a lone `--`) are dropped, and so are
/// paragraphs left without sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Document<'_> {
    let paragraphs: Vec<Paragraph<'_>> = split_paragraphs(text)
        .into_iter()
        .filter_map(|paragraph| {
            let sentences: Vec<Sentence<'_>> = split_sentences(paragraph)
                .into_iter()
                .filter_map(|sentence| {
                    let words = extract_words(sentence);
                    (!words.is_empty()).then_some(Sentence {
                        text: sentence,
                        words,
                    })
                })
                .collect();
            (!sentences.is_empty()).then_some(Paragraph {
                text: paragraph,
                sentences,
            })
        })
        .collect();

    tracing::debug!(paragraphs = paragraphs.len(), "segmented text");
    Document { paragraphs }
}

/// Split text into paragraphs (separated by one or more blank lines).
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split a paragraph into sentences.
///
/// Consecutive terminators (`?!`, `...`) form a single boundary. Text after
/// the last terminator becomes the final sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_sentence_terminator(ch) {
            continue;
        }

        let mut end = idx + ch.len_utf8();
        let mut run = 1;
        while let Some(&(next_idx, next)) = chars.peek()
            && is_sentence_terminator(next)
        {
            end = next_idx + next.len_utf8();
            run += 1;
            chars.next();
        }

        let followed_by_break = chars.peek().is_none_or(|&(_, c)| c.is_whitespace());
        if !followed_by_break {
            continue;
        }

        if run == 1 && ch == '.' && ends_with_abbreviation(&text[start..idx]) {
            continue;
        }

        push_sentence(&mut sentences, &text[start..end]);
        start = end;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}

/// Extract words from text, splitting on whitespace and stripping punctuation.
///
/// Original casing is kept; internal punctuation (`don't`, `well-known`)
/// survives.
pub fn extract_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let sentence = candidate.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}
