//! Line-Oriented Metadata Parser
//!
//! Turns a frontmatter block into a flat [`Metadata`] mapping without a YAML
//! library. Two line shapes are recognized:
//! - `- item` (list item, attached to the most recent key)
//! - `key: value` (scalar, or an empty value that list items may fill)
//!
//! A line is tested as a list item first. Anything matching neither shape is
//! skipped; the schema checks report whatever that leaves missing.

use crate::models::{Failure, FieldValue, Metadata};

/// Parser output: the mapping plus failures found while building it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlock {
    pub metadata: Metadata,
    pub failures: Vec<Failure>,
}

/// Shape of a single non-blank line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    ListItem(&'a str),
    KeyValue(&'a str, &'a str),
    Unrecognized,
}

fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.trim_start().strip_prefix('-') {
        return Line::ListItem(rest);
    }

    match line.split_once(':') {
        Some((key, value)) if !key.is_empty() => Line::KeyValue(key, value),
        _ => Line::Unrecognized,
    }
}

/// Trim, then drop one matching pair of `"` or `'` around the whole value
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Parse a frontmatter block (text between the delimiters)
///
/// Never fails: orphan list items become [`Failure::OrphanListItem`] entries
/// in encounter order and every other malformed line is ignored.
pub fn parse_block(block: &str) -> ParsedBlock {
    let mut parsed = ParsedBlock::default();
    let mut current_key: Option<String> = None;

    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match classify(line) {
            Line::ListItem(rest) => match &current_key {
                Some(key) => parsed.metadata.push_item(key, unquote(rest)),
                None => parsed.failures.push(Failure::OrphanListItem {
                    line: line.trim().to_string(),
                }),
            },
            Line::KeyValue(key, value) => {
                let key = key.trim();
                let value = unquote(value);

                let field = if value.is_empty() {
                    FieldValue::Null
                } else {
                    FieldValue::Scalar(value.to_string())
                };
                parsed.metadata.insert(key, field);

                // A whitespace-only key is stored but cannot own list items
                current_key = (!key.is_empty()).then(|| key.to_string());
            }
            Line::Unrecognized => {}
        }
    }

    parsed
}
