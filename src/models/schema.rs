//! Frontmatter schema
//!
//! The rule set is data: an ordered list of fields, each required or
//! optional, scalar or list-typed. Failures are reported in this order.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Constraint on a single frontmatter field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub name: String,

    /// Absent required fields are reported as missing
    #[serde(default = "default_required")]
    pub required: bool,

    /// Field must hold `- item` lines rather than an inline value
    #[serde(default)]
    pub list: bool,
}

fn default_required() -> bool {
    true
}

impl FieldRule {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            list: false,
        }
    }

    pub fn list(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            list: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Ordered field rules plus the field checked as an ISO 8601 date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Field checked as an ISO 8601 date; empty skips the check
    #[serde(default = "default_date_field")]
    pub date_field: String,

    #[serde(default = "default_fields")]
    pub fields: Vec<FieldRule>,
}

fn default_fields() -> Vec<FieldRule> {
    vec![
        FieldRule::scalar("title"),
        FieldRule::scalar("date"),
        FieldRule::scalar("author"),
        FieldRule::scalar("description"),
        FieldRule::list("categories"),
        FieldRule::list("tags"),
    ]
}

fn default_date_field() -> String {
    "date".to_string()
}

impl Default for Schema {
    /// Blog post schema: title, date, author, description, categories, tags
    fn default() -> Self {
        Self {
            date_field: default_date_field(),
            fields: default_fields(),
        }
    }
}

impl Schema {
    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self {
            date_field: String::new(),
            fields,
        }
    }

    pub fn with_date_field(mut self, name: impl Into<String>) -> Self {
        self.date_field = name.into();
        self
    }

    pub fn date_field(&self) -> Option<&str> {
        Some(self.date_field.as_str()).filter(|name| !name.is_empty())
    }

    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// Reject schemas that would produce ambiguous reports
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for rule in &self.fields {
            if rule.name.trim().is_empty() {
                bail!("Schema field names must not be empty");
            }
            if rule.name != rule.name.trim() {
                bail!("Schema field '{}' has surrounding whitespace", rule.name);
            }
            if !seen.insert(rule.name.as_str()) {
                bail!("Schema field '{}' is declared more than once", rule.name);
            }
        }

        if let Some(date_field) = self.date_field() {
            match self.field(date_field) {
                Some(rule) if rule.list => {
                    bail!("Date field '{}' cannot be list-typed", date_field)
                }
                Some(_) => {}
                None => bail!("Date field '{}' is not declared in the schema", date_field),
            }
        }

        Ok(())
    }
}
