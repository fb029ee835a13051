//! Markdown pre-pass.
//!
//! Uses pulldown-cmark for CommonMark parsing rather than regex-based
//! stripping, so nested code blocks, entities and reference links come out
//! right. Block boundaries are emitted as blank lines so the segmenter still
//! sees paragraphs.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes:
/// - Code blocks (fenced and indented)
/// - Inline code
/// - HTML
/// - YAML frontmatter
/// - Headings (section titles are not prose)
/// - Tables
/// - Image alt text
///
/// Preserves:
/// - Link text (the visible part)
/// - Blockquote text
/// - List item text, one paragraph per item
/// - Emphasis/strong text (without markers)
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => {
                skip_depth += 1;
            }
            Event::End(
                TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image,
            ) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                push_paragraph_break(&mut result);
            }

            _ => {}
        }
    }

    let trimmed_len = result.trim_end().len();
    result.truncate(trimmed_len);
    result
}

/// Terminate the current block with a single blank line.
fn push_paragraph_break(out: &mut String) {
    let trimmed_len = out.trim_end().len();
    if trimmed_len == 0 {
        out.clear();
        return;
    }
    out.truncate(trimmed_len);
    out.push_str("\n\n");
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_code_blocks() {
        let input = "Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("let x"));
        assert_eq!(result, "Some text.\n\nMore text.");
    }

    #[test]
    fn strip_removes_frontmatter() {
        let input = "---\nstatus: accepted\ndate: 2026-02-07\n---\n\nSome text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("status"));
        assert_eq!(result, "Some text.");
    }

    #[test]
    fn strip_removes_headings() {
        let input = "# Header\n\nSome text.\n\n## Subheader\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("Header"));
        assert_eq!(result, "Some text.\n\nMore text.");
    }

    #[test]
    fn strip_preserves_link_text() {
        let input = "Check [this link](https://example.com) for details.";
        let result = strip_to_prose(input);
        assert_eq!(result, "Check this link for details.");
    }

    #[test]
    fn strip_removes_inline_code() {
        let input = "Use `foo()` to do things.";
        let result = strip_to_prose(input);
        assert!(!result.contains("foo()"));
        assert!(result.starts_with("Use"));
        assert!(result.ends_with("to do things."));
    }

    #[test]
    fn strip_removes_emphasis_markers() {
        let result = strip_to_prose("This is **bold** and *italic* text.");
        assert_eq!(result, "This is bold and italic text.");
    }

    #[test]
    fn strip_removes_tables() {
        let input = "Text before.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nText after.";
        let result = strip_to_prose(input);
        assert_eq!(result, "Text before.\n\nText after.");
    }

    #[test]
    fn strip_preserves_blockquote_text() {
        let input = "> This is a quote.\n\nRegular text.";
        let result = strip_to_prose(input);
        assert_eq!(result, "This is a quote.\n\nRegular text.");
    }

    #[test]
    fn list_items_become_paragraphs() {
        let input = "- First item here.\n- Second item here.\n";
        let result = strip_to_prose(input);
        assert_eq!(result, "First item here.\n\nSecond item here.");
    }

    #[test]
    fn soft_breaks_join_lines() {
        let result = strip_to_prose("One line\ncontinues here.");
        assert_eq!(result, "One line continues here.");
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
        assert!(strip_to_prose("```\ncode only\n```").is_empty());
    }
}
