//! Readability formulas.
//!
//! Every formula is a pure function of [`TextCounts`]. [`evaluate`] computes
//! all of them at full precision; rounding is left to the output boundary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::counts::TextCounts;
use super::reports::serialize_rounded;
use crate::error::{AnalysisError, AnalysisResult};
use crate::metric::Metric;

/// Derived scores at full precision.
///
/// Serialization rounds each score to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scores {
    /// Average sentence length (words per sentence).
    #[serde(serialize_with = "serialize_rounded")]
    pub asl: f64,
    /// Percentage of complex words.
    #[serde(serialize_with = "serialize_rounded")]
    pub pcw: f64,
    /// Average sentences per paragraph.
    #[serde(serialize_with = "serialize_rounded")]
    pub aspp: f64,
    /// Clarity Index. Target 20–40, ideal ≈30.
    #[serde(serialize_with = "serialize_rounded")]
    pub clarity_index: f64,
    /// Gunning Fog index. Target below 12.
    #[serde(serialize_with = "serialize_rounded")]
    pub gunning_fog: f64,
    /// Infogineering index. Target 15–25.
    #[serde(serialize_with = "serialize_rounded")]
    pub infogineering_index: f64,
    /// Flesch Reading Ease. Higher is easier.
    #[serde(serialize_with = "serialize_rounded")]
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    #[serde(serialize_with = "serialize_rounded")]
    pub flesch_kincaid_grade: f64,
}

impl Scores {
    /// Score of the given metric.
    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::ClarityIndex => self.clarity_index,
            Metric::GunningFog => self.gunning_fog,
            Metric::InfogineeringIndex => self.infogineering_index,
            Metric::FleschReadingEase => self.flesch_reading_ease,
            Metric::FleschKincaidGrade => self.flesch_kincaid_grade,
        }
    }
}

/// Evaluate every formula against the counts.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] if `words`, `sentences` or
/// `paragraphs` is zero.
#[tracing::instrument(skip_all)]
pub fn evaluate(counts: &TextCounts) -> AnalysisResult<Scores> {
    if counts.words == 0 || counts.sentences == 0 || counts.paragraphs == 0 {
        return Err(AnalysisError::InsufficientData);
    }

    Ok(Scores {
        asl: asl(counts),
        pcw: pcw(counts),
        aspp: aspp(counts),
        clarity_index: score(Metric::ClarityIndex, counts),
        gunning_fog: score(Metric::GunningFog, counts),
        infogineering_index: score(Metric::InfogineeringIndex, counts),
        flesch_reading_ease: score(Metric::FleschReadingEase, counts),
        flesch_kincaid_grade: score(Metric::FleschKincaidGrade, counts),
    })
}

/// Compute a single metric. Only reached through [`evaluate`], which rejects
/// zero denominators.
fn score(metric: Metric, counts: &TextCounts) -> f64 {
    match metric {
        Metric::ClarityIndex => asl(counts) + pcw(counts),
        Metric::GunningFog => 0.4 * (asl(counts) + pcw(counts)),
        Metric::InfogineeringIndex => {
            5.0f64.mul_add(aspp(counts), 100.0f64.mul_add(plw(counts), asl(counts))) / 2.0
        }
        Metric::FleschReadingEase => {
            84.6f64.mul_add(-spw(counts), 1.015f64.mul_add(-asl(counts), 206.835))
        }
        Metric::FleschKincaidGrade => {
            0.39f64.mul_add(asl(counts), 11.8 * spw(counts)) - 15.59
        }
    }
}

/// Average sentence length.
fn asl(counts: &TextCounts) -> f64 {
    counts.words as f64 / counts.sentences as f64
}

/// Percentage of complex words.
fn pcw(counts: &TextCounts) -> f64 {
    100.0 * counts.complex_words as f64 / counts.words as f64
}

/// Average sentences per paragraph.
fn aspp(counts: &TextCounts) -> f64 {
    counts.sentences as f64 / counts.paragraphs as f64
}

/// Long words as a fraction of all words.
fn plw(counts: &TextCounts) -> f64 {
    counts.long_words as f64 / counts.words as f64
}

/// Syllables per word.
fn spw(counts: &TextCounts) -> f64 {
    counts.syllables as f64 / counts.words as f64
}
