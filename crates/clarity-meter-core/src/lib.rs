//! Core library for clarity-meter.
//!
//! Computes classic readability formulas (Clarity Index, Gunning Fog,
//! Infogineering, Flesch Reading Ease, Flesch-Kincaid Grade) from plain text.
//!
//! # Modules
//!
//! - [`analysis`] - The pipeline, raw counts, formulas and reports
//! - [`classify`] - Syllable estimation and word classification
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`markdown`] - Optional markdown-to-prose pre-pass
//! - [`metric`] - Selectable metrics and their target bands
//! - [`normalize`] - Input trimming and line-break folding
//! - [`text`] - Paragraph, sentence and word segmentation
//!
//! # Quick Start
//!
//! ```
//! use clarity_meter_core::{Metric, analyze_report};
//!
//! let report = analyze_report("The cat sat. The dog ran.", Metric::GunningFog, false)?;
//! assert_eq!(report.metrics.counts.sentences, 2);
//! println!("{}: {:.1} ({})", report.selected_metric, report.score, report.assessment);
//! # Ok::<(), clarity_meter_core::AnalysisError>(())
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod classify;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod markdown;
pub mod metric;
pub mod normalize;
pub mod text;

pub use analysis::{
    AnalysisReport, MetricBundle, Scores, TextCounts, analyze, analyze_report, analyze_text,
    validate_input_size,
};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use metric::{Assessment, Metric, MetricInfo, Target};
