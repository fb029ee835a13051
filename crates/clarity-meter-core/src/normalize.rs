//! Input normalization.
//!
//! Trims surrounding whitespace, folds `\r\n` and lone `\r` line breaks into
//! `\n`, and rejects samples too short to score.

use std::borrow::Cow;

use crate::error::{AnalysisError, AnalysisResult};

/// Minimum number of characters (after trimming) accepted for analysis.
pub const MIN_INPUT_CHARS: usize = 10;

/// Normalize raw input text.
///
/// Borrows the input when no line-break rewriting is needed.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] when the trimmed text has fewer than
/// [`MIN_INPUT_CHARS`] characters.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn normalize(text: &str) -> AnalysisResult<Cow<'_, str>> {
    let trimmed = text.trim();
    let length = trimmed.chars().count();
    if length < MIN_INPUT_CHARS {
        tracing::debug!(length, "input below minimum length");
        return Err(AnalysisError::EmptyInput {
            length,
            minimum: MIN_INPUT_CHARS,
        });
    }

    if trimmed.contains('\r') {
        Ok(Cow::Owned(trimmed.replace("\r\n", "\n").replace('\r', "\n")))
    } else {
        Ok(Cow::Borrowed(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let text = normalize("   The cat sat down.  \n\n").unwrap();
        assert_eq!(text, "The cat sat down.");
        assert!(matches!(text, Cow::Borrowed(_)));
    }

    #[test]
    fn short_input_is_rejected() {
        let err = normalize("short").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::EmptyInput {
                length: 5,
                minimum: MIN_INPUT_CHARS
            }
        );
    }

    #[test]
    fn whitespace_only_is_rejected() {
        assert!(matches!(
            normalize(" \n\t \r\n "),
            Err(AnalysisError::EmptyInput { length: 0, .. })
        ));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 9 characters, 18 bytes
        assert!(normalize("éééééé ée").is_err());
        assert!(normalize("éééééé éée").is_ok());
    }

    #[test]
    fn folds_line_break_styles() {
        let text = normalize("Line one.\r\n\r\nLine two.\rLine three.").unwrap();
        assert_eq!(text, "Line one.\n\nLine two.\nLine three.");
    }
}
