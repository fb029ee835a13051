//! Logging setup.
//!
//! Human-readable events go to stderr. When a log directory or path is
//! configured, events are also written as JSON lines through a non-blocking
//! file writer.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path.
const LOG_PATH_ENV: &str = "CLARITY_METER_LOG_PATH";
/// Log directory; the file inside it is [`LOG_FILE_NAME`].
const LOG_DIR_ENV: &str = "CLARITY_METER_LOG_DIR";
/// File name used inside a log directory.
const LOG_FILE_NAME: &str = "clarity-meter.jsonl";

/// Where (if anywhere) to write the JSONL log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for [`LOG_FILE_NAME`].
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to `log_dir` from configuration.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir: std::env::var_os(LOG_DIR_ENV).map(PathBuf::from).or(log_dir),
        }
    }

    /// Resolve the log file as `(directory, file name)`.
    fn log_file(&self) -> Option<(PathBuf, PathBuf)> {
        if let Some(ref path) = self.log_path {
            let file_name = path.file_name()?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            return Some((dir, PathBuf::from(file_name)));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), PathBuf::from(LOG_FILE_NAME)))
    }
}

/// Keeps the file writer alive; drop it at process exit to flush.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` selects `error`, `-v` `debug`,
/// `-vv` `trace`, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a subscriber is already
/// installed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, file_name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, &file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_current_span(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(ObservabilityGuard { _file: guard })
}
