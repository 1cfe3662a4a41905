//! Metadata Types
//!
//! Flat key/value view of a frontmatter block as produced by the
//! line-oriented parser. No nesting: a value is a scalar, a list of strings,
//! or a key declared with nothing after the colon.

use serde::Serialize;
use std::collections::BTreeMap;

/// Value stored for a single frontmatter key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// `key:` with no inline value; becomes a sequence if list lines follow
    Null,
    /// Trimmed and unquoted inline value
    Scalar(String),
    /// Items from `- item` lines, in the order they appeared
    Sequence(Vec<String>),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Null, an empty scalar, or a sequence with no items
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Scalar(s) => s.is_empty(),
            FieldValue::Sequence(items) => items.is_empty(),
        }
    }
}

/// Mapping from field name to value
///
/// Keys are case-sensitive. Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: BTreeMap<String, FieldValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    /// Append an item to `key`, turning any non-sequence value into an empty
    /// sequence first. An empty `item` only performs the conversion.
    pub fn push_item(&mut self, key: &str, item: &str) {
        let entry = self
            .fields
            .entry(key.to_string())
            .or_insert(FieldValue::Null);

        if !matches!(entry, FieldValue::Sequence(_)) {
            *entry = FieldValue::Sequence(Vec::new());
        }

        if let FieldValue::Sequence(items) = entry {
            if !item.is_empty() {
                items.push(item.to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
