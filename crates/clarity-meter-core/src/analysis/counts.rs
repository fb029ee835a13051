//! Aggregation of classified words into raw counts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify;
use crate::error::{AnalysisError, AnalysisResult};
use crate::text::Document;

/// The six raw counts every formula is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextCounts {
    /// Number of words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Words with three or more syllables (see [`classify::is_complex`]).
    pub complex_words: usize,
    /// Words with more than eight letters or digits.
    pub long_words: usize,
    /// Number of paragraphs.
    pub paragraphs: usize,
}

/// Reduce a segmented document to its raw counts.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] when the document has no
/// words or no sentences.
#[tracing::instrument(skip_all)]
pub fn aggregate(document: &Document<'_>) -> AnalysisResult<TextCounts> {
    let mut counts = TextCounts {
        paragraphs: document.paragraphs.len(),
        ..TextCounts::default()
    };

    for sentence in document.sentences() {
        counts.sentences += 1;
        for (idx, word) in sentence.words.iter().enumerate() {
            let features = classify::classify(word, idx == 0);
            counts.words += 1;
            counts.syllables += features.syllables;
            counts.complex_words += usize::from(features.is_complex);
            counts.long_words += usize::from(features.is_long);
        }
    }

    tracing::debug!(
        words = counts.words,
        sentences = counts.sentences,
        syllables = counts.syllables,
        complex_words = counts.complex_words,
        long_words = counts.long_words,
        paragraphs = counts.paragraphs,
        "aggregated counts"
    );

    if counts.words == 0 || counts.sentences == 0 {
        return Err(AnalysisError::InsufficientData);
    }

    Ok(counts)
}
