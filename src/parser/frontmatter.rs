//! Frontmatter Block Extractor
//!
//! Locates the `---` delimited metadata block at the very start of a document:
//! - BOM (Byte Order Mark) stripping
//! - Line ending normalization (CRLF → LF)
//! - Delimiter tokens that appear later in the body are never matched

use crate::models::Failure;
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening delimiter at byte 0, lazily matched body, closing delimiter.
/// Trailing whitespace after each `---` is tolerated; the newline after each
/// delimiter line is mandatory.
static FRONTMATTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").expect("frontmatter pattern is valid")
});

/// Normalize content: strip BOM, normalize line endings
///
/// Handles:
/// - UTF-8 BOM (EF BB BF / U+FEFF)
/// - CRLF → LF
/// - CR → LF (old Mac style)
pub fn normalize_content(content: &str) -> String {
    let stripped = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    stripped.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split a (normalized) document into its metadata block and body
///
/// # Returns
/// * `(block, body)` where `block` excludes both delimiter lines
///
/// # Errors
/// * [`Failure::MissingDelimiters`] if the document does not open with a
///   well-formed `---` pair
pub fn split_frontmatter(content: &str) -> Result<(&str, &str), Failure> {
    let caps = FRONTMATTER_RE
        .captures(content)
        .ok_or(Failure::MissingDelimiters)?;

    let whole = caps.get(0).ok_or(Failure::MissingDelimiters)?;
    let block = caps.get(1).map_or("", |m| m.as_str());

    Ok((block, &content[whole.end()..]))
}

/// Extract the raw metadata block text
pub fn extract_block(content: &str) -> Result<&str, Failure> {
    split_frontmatter(content).map(|(block, _)| block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bom() {
        let with_bom = "\u{FEFF}---\ntitle: test\n---\n";
        let normalized = normalize_content(with_bom);
        assert!(normalized.starts_with("---"));
    }

    #[test]
    fn test_normalize_crlf() {
        let crlf = "---\r\ntitle: test\r\n---\r\n";
        let normalized = normalize_content(crlf);
        assert!(!normalized.contains('\r'));
        assert_eq!(normalized, "---\ntitle: test\n---\n");
    }

    #[test]
    fn test_split_frontmatter_basic() {
        let content = "---\ntitle: value\n---\n\nBody content";
        let (block, body) = split_frontmatter(content).unwrap();
        assert_eq!(block, "title: value");
        assert_eq!(body.trim(), "Body content");
    }

    #[test]
    fn test_split_frontmatter_no_body() {
        let (block, body) = split_frontmatter("---\ntitle: value\n---\n").unwrap();
        assert_eq!(block, "title: value");
        assert!(body.is_empty());
    }

    #[test]
    fn test_trailing_whitespace_after_delimiters() {
        let content = "---  \ntitle: value\n---\t\nbody";
        assert_eq!(extract_block(content).unwrap(), "title: value");
    }

    #[test]
    fn test_closing_delimiter_requires_newline() {
        assert_eq!(
            extract_block("---\ntitle: value\n---"),
            Err(Failure::MissingDelimiters)
        );
    }

    #[test]
    fn test_missing_opening() {
        assert!(extract_block("title: value\n---\n").is_err());
        assert!(extract_block("\n---\ntitle: value\n---\n").is_err());
        assert!(extract_block("  ---\ntitle: value\n---\n").is_err());
    }

    #[test]
    fn test_missing_closing() {
        assert!(extract_block("---\ntitle: value\n").is_err());
    }

    #[test]
    fn test_delimiter_later_in_body_is_not_an_opening() {
        let content = "# Heading\n\n---\ntitle: value\n---\n";
        assert!(extract_block(content).is_err());
    }

    #[test]
    fn test_block_stops_at_first_closing_delimiter() {
        let content = "---\ntitle: a\n---\nbody\n---\nmore\n";
        let (block, body) = split_frontmatter(content).unwrap();
        assert_eq!(block, "title: a");
        assert_eq!(body, "body\n---\nmore\n");
    }

    #[test]
    fn test_indented_dashes_do_not_close() {
        let content = "---\ntitle: a\n  ---\n---\n";
        assert_eq!(extract_block(content).unwrap(), "title: a\n  ---");
    }

    #[test]
    fn test_normalized_bom_and_crlf_document_splits() {
        let normalized = normalize_content("\u{FEFF}---\r\nkey: value\r\n---\r\n");
        assert_eq!(extract_block(&normalized).unwrap(), "key: value");
    }
}
