//! Error types for clarity-meter-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
///
/// Every variant is deterministic: the same input fails the same way, so
/// callers should ask for different input instead of retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The trimmed input is too short to analyze meaningfully.
    #[error("input too short: {length} characters after trimming (minimum: {minimum})")]
    EmptyInput {
        /// Character count of the trimmed input.
        length: usize,
        /// Minimum character count accepted.
        minimum: usize,
    },

    /// Segmentation found no words or no sentences.
    #[error("no words or sentences detected in input")]
    InsufficientData,

    /// An unknown metric key was requested.
    #[error("unknown metric: {name}. Use: {available}")]
    InvalidMetric {
        /// The metric key that was requested.
        name: String,
        /// Comma-separated list of available metric keys.
        available: String,
    },

    /// The input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge {
        /// Size of the input in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
