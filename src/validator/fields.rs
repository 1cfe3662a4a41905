use crate::models::{Failure, FieldRule, FieldValue, Metadata, Schema};

/// Presence and scalar-vs-list checks driven by a [`Schema`]
pub struct FieldValidator<'a> {
    schema: &'a Schema,
}

impl<'a> FieldValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Check every schema field in order
    pub fn validate(&self, metadata: &Metadata) -> Vec<Failure> {
        self.schema
            .fields
            .iter()
            .filter_map(|rule| check_field(rule, metadata.get(&rule.name)))
            .collect()
    }
}

/// At most one failure per field
fn check_field(rule: &FieldRule, value: Option<&FieldValue>) -> Option<Failure> {
    let field = || rule.name.clone();

    let value = match value {
        Some(value) => value,
        None if rule.required => return Some(Failure::MissingField { field: field() }),
        None => return None,
    };

    if rule.list {
        match value {
            FieldValue::Sequence(items) if items.is_empty() => {
                Some(Failure::EmptyList { field: field() })
            }
            FieldValue::Sequence(_) => None,
            // `key:` with no list lines underneath
            FieldValue::Null => Some(Failure::EmptyList { field: field() }),
            FieldValue::Scalar(s) if s.is_empty() => Some(Failure::EmptyField { field: field() }),
            FieldValue::Scalar(_) => Some(Failure::NotAList { field: field() }),
        }
    } else {
        match value {
            FieldValue::Scalar(s) if !s.is_empty() => None,
            _ => Some(Failure::EmptyField { field: field() }),
        }
    }
}
