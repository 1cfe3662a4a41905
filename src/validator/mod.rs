//! Frontmatter validation pipeline
//!
//! Extract the block, parse it line by line, then run the field and date
//! checks. Failures are collected in that order; a missing block stops the
//! pipeline before anything else runs.

pub mod date;
pub mod fields;

pub use date::{is_iso_date, DateValidator};
pub use fields::FieldValidator;

use crate::models::{Schema, ValidationReport};
use crate::parser::{normalize_content, parse_block, split_frontmatter};

/// Validates documents against a fixed [`Schema`]
///
/// Holds no per-document state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct FrontmatterValidator {
    schema: Schema,
}

impl FrontmatterValidator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Validate one document's raw text
    pub fn validate(&self, content: &str) -> ValidationReport {
        let normalized = normalize_content(content);

        let block = match split_frontmatter(&normalized) {
            Ok((block, _body)) => block,
            Err(failure) => return ValidationReport::new(vec![failure]),
        };

        let parsed = parse_block(block);
        let mut report = ValidationReport::new(parsed.failures);

        report.extend(FieldValidator::new(&self.schema).validate(&parsed.metadata));

        if let Some(field) = self.schema.date_field() {
            report.extend(DateValidator::new(field).validate(&parsed.metadata));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Failure, FailureCategory, FieldRule};

    const POST: &str = r#"---
title: "Hello World"
date: 2024-01-15
author: Jane
description: "A post"
categories:
  - tech
tags:
  - go
  - cli
---

Body text.
"#;

    #[test]
    fn test_example_post_is_valid() {
        let report = FrontmatterValidator::default().validate(POST);
        assert!(report.is_valid(), "{:?}", report.failures);
    }

    #[test]
    fn test_missing_delimiters_short_circuit() {
        let report = FrontmatterValidator::default().validate("- orphan\ntitle: x\n");
        assert_eq!(report.failures, vec![Failure::MissingDelimiters]);
    }

    #[test]
    fn test_failure_order() {
        let content = "---\n- orphan\ndate: someday\ntags: inline\n---\n";
        let report = FrontmatterValidator::default().validate(content);
        let categories: Vec<FailureCategory> =
            report.failures.iter().map(|f| f.category()).collect();

        assert_eq!(
            categories,
            vec![
                FailureCategory::Parse,
                FailureCategory::Field,
                FailureCategory::Field,
                FailureCategory::Field,
                FailureCategory::Field,
                FailureCategory::Field,
                FailureCategory::Date,
            ]
        );
        assert_eq!(
            report.messages().last().map(String::as_str),
            Some("invalid date format: 'someday'. Expected ISO 8601, e.g. YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS+HH:MM")
        );
    }

    #[test]
    fn test_crlf_document() {
        let content = POST.replace('\n', "\r\n");
        assert!(FrontmatterValidator::default().validate(&content).is_valid());
    }

    #[test]
    fn test_custom_schema_without_date_check() {
        let schema = Schema::new(vec![FieldRule::scalar("title"), FieldRule::scalar("date")]);
        let validator = FrontmatterValidator::new(schema);

        let report = validator.validate("---\ntitle: x\ndate: whenever\n---\n");
        assert!(report.is_valid());
    }

    #[test]
    fn test_custom_date_field() {
        let schema = Schema::new(vec![FieldRule::scalar("published")]).with_date_field("published");
        let validator = FrontmatterValidator::new(schema);

        let report = validator.validate("---\npublished: 2024/01/15\n---\n");
        assert_eq!(
            report.failures,
            vec![Failure::InvalidDate {
                field: "published".into(),
                value: "2024/01/15".into()
            }]
        );
    }

    #[test]
    fn test_validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FrontmatterValidator>();
    }
}
