//! Report structs for text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use in
//! both CLI JSON output and MCP tool responses. Scores are kept at full
//! precision in memory and rounded to one decimal place when serialized.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

use super::counts::TextCounts;
use super::formulas::Scores;
use crate::metric::{Assessment, Metric, Target};

/// All raw counts and derived scores for one analysis.
///
/// Serializes as a flat mapping of 14 numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricBundle {
    /// Raw counts.
    #[serde(flatten)]
    pub counts: TextCounts,
    /// Derived scores.
    #[serde(flatten)]
    pub scores: Scores,
}

impl MetricBundle {
    /// Bundle counts with the scores evaluated from them.
    pub const fn new(counts: TextCounts, scores: Scores) -> Self {
        Self { counts, scores }
    }

    /// Full-precision score of the given metric.
    pub const fn score(&self, metric: Metric) -> f64 {
        self.scores.get(metric)
    }
}

/// Caller-facing envelope that foregrounds one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// The metric the caller asked to highlight.
    pub selected_metric: Metric,
    /// Score of the selected metric.
    #[serde(serialize_with = "serialize_rounded")]
    pub score: f64,
    /// Target band of the selected metric.
    pub target: Target,
    /// Where the score falls relative to the band.
    pub assessment: Assessment,
    /// Every count and score.
    pub metrics: MetricBundle,
}

impl AnalysisReport {
    /// Build a report highlighting `metric`.
    pub fn new(metric: Metric, metrics: MetricBundle) -> Self {
        let score = metrics.score(metric);
        let target = metric.target();
        Self {
            selected_metric: metric,
            score,
            target,
            assessment: target.assess(score),
            metrics,
        }
    }
}

/// Round to one decimal place, normalizing `-0.0` to `0.0`.
pub fn round1(v: f64) -> f64 {
    let rounded = (v * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Serialize an `f64` rounded with [`round1`].
pub(crate) fn serialize_rounded<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round1(*value))
}
