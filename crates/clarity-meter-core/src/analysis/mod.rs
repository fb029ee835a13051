//! Readability analysis pipeline.
//!
//! Normalize → segment → classify and aggregate → evaluate formulas. Each
//! stage is a pure function and can be called individually; [`analyze`] and
//! [`analyze_report`] run the whole pipeline.

pub mod counts;
pub mod formulas;
pub mod reports;

use std::borrow::Cow;

pub use counts::TextCounts;
pub use formulas::Scores;
pub use reports::{AnalysisReport, MetricBundle};

use crate::error::{AnalysisError, AnalysisResult};
use crate::markdown;
use crate::metric::Metric;
use crate::normalize;
use crate::text;

/// Analyze text and compute every metric.
///
/// `selected_metric` is advisory: it is validated but does not change what is
/// computed.
///
/// # Errors
///
/// - [`AnalysisError::InvalidMetric`] for an unknown metric key.
/// - [`AnalysisError::EmptyInput`] if the trimmed text is under 10 characters.
/// - [`AnalysisError::InsufficientData`] if no words or sentences are found.
///
/// # Example
///
/// ```
/// let bundle = clarity_meter_core::analyze("The cat sat. The dog ran.", "clarity_index")?;
/// assert_eq!(bundle.counts.words, 6);
/// assert_eq!(bundle.counts.sentences, 2);
/// # Ok::<(), clarity_meter_core::AnalysisError>(())
/// ```
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str, selected_metric: &str) -> AnalysisResult<MetricBundle> {
    let metric: Metric = selected_metric.parse()?;
    tracing::debug!(metric = %metric, "metric selected");
    analyze_text(text)
}

/// Run the pipeline without selecting a metric.
///
/// # Errors
///
/// Same as [`analyze`], minus metric validation.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_text(text: &str) -> AnalysisResult<MetricBundle> {
    let normalized = normalize::normalize(text)?;
    let document = text::segment(&normalized);
    let counts = counts::aggregate(&document)?;
    let scores = formulas::evaluate(&counts)?;
    Ok(MetricBundle::new(counts, scores))
}

/// Analyze text and foreground `metric` in the result.
///
/// If `strip_md` is `true`, markdown syntax is stripped to prose first.
///
/// # Errors
///
/// Same as [`analyze_text`].
#[tracing::instrument(skip(text), fields(text_len = text.len(), strip_md))]
pub fn analyze_report(
    text: &str,
    metric: Metric,
    strip_md: bool,
) -> AnalysisResult<AnalysisReport> {
    let prose = if strip_md {
        Cow::Owned(markdown::strip_to_prose(text))
    } else {
        Cow::Borrowed(text)
    };

    let bundle = analyze_text(&prose)?;
    let report = AnalysisReport::new(metric, bundle);
    tracing::debug!(
        metric = %metric,
        score = report.score,
        assessment = %report.assessment,
        "analysis complete"
    );
    Ok(report)
}

/// Reject input larger than `max_bytes`, if a limit is set.
///
/// # Errors
///
/// Returns [`AnalysisError::InputTooLarge`] when the limit is exceeded.
pub const fn validate_input_size(text: &str, max_bytes: Option<usize>) -> AnalysisResult<()> {
    match max_bytes {
        Some(limit) if text.len() > limit => Err(AnalysisError::InputTooLarge {
            size: text.len(),
            limit,
        }),
        _ => Ok(()),
    }
}
