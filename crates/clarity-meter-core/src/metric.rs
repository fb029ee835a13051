//! The selectable readability metrics and their target bands.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A readability formula a caller can foreground.
///
/// Selecting a metric never changes what is computed; every analysis
/// evaluates all formulas.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Metric {
    /// Average sentence length plus percentage of complex words.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "clarity_index"))]
    ClarityIndex,
    /// Gunning Fog index: years of schooling needed on first reading.
    #[cfg_attr(feature = "clap", value(name = "gunning_fog"))]
    GunningFog,
    /// Infogineering index: sentence length, long words and paragraph density.
    #[cfg_attr(feature = "clap", value(name = "infogineering_index"))]
    InfogineeringIndex,
    /// Flesch Reading Ease: higher scores read more easily.
    #[cfg_attr(feature = "clap", value(name = "flesch_reading_ease"))]
    FleschReadingEase,
    /// Flesch-Kincaid Grade Level: US school grade.
    #[cfg_attr(feature = "clap", value(name = "flesch_kincaid_grade"))]
    FleschKincaidGrade,
}

impl Metric {
    /// Every selectable metric, in display order.
    pub const ALL: [Self; 5] = [
        Self::ClarityIndex,
        Self::GunningFog,
        Self::InfogineeringIndex,
        Self::FleschReadingEase,
        Self::FleschKincaidGrade,
    ];

    /// Returns the metric's key as used in serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClarityIndex => "clarity_index",
            Self::GunningFog => "gunning_fog",
            Self::InfogineeringIndex => "infogineering_index",
            Self::FleschReadingEase => "flesch_reading_ease",
            Self::FleschKincaidGrade => "flesch_kincaid_grade",
        }
    }

    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ClarityIndex => "Clarity Index",
            Self::GunningFog => "Gunning Fog",
            Self::InfogineeringIndex => "Infogineering Index",
            Self::FleschReadingEase => "Flesch Reading Ease",
            Self::FleschKincaidGrade => "Flesch-Kincaid Grade",
        }
    }

    /// The formula, written in terms of the raw counts.
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::ClarityIndex => "ASL + 100 × complex_words / words",
            Self::GunningFog => "0.4 × (ASL + 100 × complex_words / words)",
            Self::InfogineeringIndex => {
                "(ASL + 100 × long_words / words + 5 × sentences / paragraphs) / 2"
            }
            Self::FleschReadingEase => "206.835 − 1.015 × ASL − 84.6 × syllables / words",
            Self::FleschKincaidGrade => "0.39 × ASL + 11.8 × syllables / words − 15.59",
        }
    }

    /// The score band the formula is calibrated against.
    pub const fn target(&self) -> Target {
        match self {
            Self::ClarityIndex => Target::Range {
                min: 20.0,
                max: 40.0,
                ideal: Some(30.0),
            },
            Self::GunningFog => Target::Below { max: 12.0 },
            Self::InfogineeringIndex => Target::Range {
                min: 15.0,
                max: 25.0,
                ideal: None,
            },
            Self::FleschReadingEase => Target::HigherIsEasier,
            Self::FleschKincaidGrade => Target::GradeLevel,
        }
    }

    /// Comma-separated list of all metric keys.
    pub fn available() -> String {
        Self::ALL.map(|m| m.as_str()).join(", ")
    }

    /// Catalog entry describing this metric.
    pub const fn info(&self) -> MetricInfo {
        MetricInfo {
            key: *self,
            name: self.label(),
            formula: self.formula(),
            target: self.target(),
        }
    }

    /// Catalog entries for every metric, in display order.
    pub fn catalog() -> Vec<MetricInfo> {
        Self::ALL.iter().map(Self::info).collect()
    }
}

/// Serializable description of a metric, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct MetricInfo {
    /// Metric key.
    pub key: Metric,
    /// Human-readable name.
    pub name: &'static str,
    /// Formula in terms of the raw counts.
    pub formula: &'static str,
    /// Target band.
    pub target: Target,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| AnalysisError::InvalidMetric {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}

/// Target band of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Target {
    /// Scores between `min` and `max` (inclusive) are on target.
    Range {
        /// Lowest on-target score.
        min: f64,
        /// Highest on-target score.
        max: f64,
        /// Preferred score, if the band has one.
        #[serde(skip_serializing_if = "Option::is_none")]
        ideal: Option<f64>,
    },
    /// Scores strictly below `max` are on target.
    Below {
        /// Exclusive upper bound.
        max: f64,
    },
    /// No band; higher scores read more easily.
    HigherIsEasier,
    /// No band; the score is a school grade level.
    GradeLevel,
}

impl Target {
    /// Place a score relative to this band.
    pub fn assess(&self, score: f64) -> Assessment {
        match *self {
            Self::Range { min, .. } if score < min => Assessment::BelowTarget,
            Self::Range { max, .. } if score > max => Assessment::AboveTarget,
            Self::Range { .. } => Assessment::WithinTarget,
            Self::Below { max } if score < max => Assessment::WithinTarget,
            Self::Below { .. } => Assessment::AboveTarget,
            Self::HigherIsEasier | Self::GradeLevel => Assessment::Unbanded,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range {
                min,
                max,
                ideal: Some(ideal),
            } => write!(f, "{min}–{max}, ideal ≈{ideal}"),
            Self::Range { min, max, .. } => write!(f, "{min}–{max}"),
            Self::Below { max } => write!(f, "below {max}"),
            Self::HigherIsEasier => f.write_str("higher = easier"),
            Self::GradeLevel => f.write_str("grade level"),
        }
    }
}

/// Where a score falls relative to its metric's target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    /// Inside the band.
    WithinTarget,
    /// Above the band (harder to read for every banded metric).
    AboveTarget,
    /// Below the band.
    BelowTarget,
    /// The metric has no band.
    Unbanded,
}

impl Assessment {
    /// Returns the assessment as a snake_case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WithinTarget => "within_target",
            Self::AboveTarget => "above_target",
            Self::BelowTarget => "below_target",
            Self::Unbanded => "unbanded",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
