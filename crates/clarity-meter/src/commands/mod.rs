//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;
use clarity_meter_core::AnalysisError;

pub mod analyze;
pub mod info;
pub mod metrics;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes
        && metadata.len() > u64::try_from(max).unwrap_or(u64::MAX)
    {
        let err = AnalysisError::InputTooLarge {
            size: usize::try_from(metadata.len()).unwrap_or(usize::MAX),
            limit: max,
        };
        return Err(anyhow::Error::new(err).context(format!("failed to read {path}")));
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read all of `reader`, stopping one byte past the configured limit.
pub fn read_input_stream<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let cap = max_bytes.map_or(u64::MAX, |max| {
        u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1)
    });
    let mut bytes = Vec::new();
    reader
        .take(cap)
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;

    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: stdin exceeds {max} bytes");
    }

    String::from_utf8(bytes).context("stdin is not valid UTF-8")
}
