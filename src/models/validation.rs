use serde::Serialize;

/// A single reason a document failed validation
///
/// The `Display` text is the user-facing message printed in CI output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    #[error("missing or invalid delimiters")]
    MissingDelimiters,

    #[error("list item without a preceding key: '{line}'")]
    OrphanListItem { line: String },

    #[error("missing required field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' is empty or not properly formatted")]
    EmptyField { field: String },

    #[error("field '{field}' should be a list")]
    NotAList { field: String },

    #[error("field '{field}' is an empty list")]
    EmptyList { field: String },

    #[error(
        "invalid date format: '{value}'. Expected ISO 8601, e.g. YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS+HH:MM"
    )]
    InvalidDate { field: String, value: String },

    #[error("filename does not follow YYYY-MM-DD-<title>.{extension} convention: '{filename}'")]
    FilenameConvention { filename: String, extension: String },

    #[error("could not read file: {reason}")]
    Unreadable { reason: String },
}

impl Failure {
    /// Get the category this failure belongs to
    pub fn category(&self) -> FailureCategory {
        match self {
            Failure::MissingDelimiters => FailureCategory::Structure,
            Failure::OrphanListItem { .. } => FailureCategory::Parse,
            Failure::MissingField { .. }
            | Failure::EmptyField { .. }
            | Failure::NotAList { .. }
            | Failure::EmptyList { .. } => FailureCategory::Field,
            Failure::InvalidDate { .. } => FailureCategory::Date,
            Failure::FilenameConvention { .. } => FailureCategory::Filename,
            Failure::Unreadable { .. } => FailureCategory::Io,
        }
    }

    /// Field named by this failure, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Failure::MissingField { field }
            | Failure::EmptyField { field }
            | Failure::NotAList { field }
            | Failure::EmptyList { field }
            | Failure::InvalidDate { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Category of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// No well-formed delimiter pair at the start of the document
    Structure,
    /// Construct the line parser could not attach to a key
    Parse,
    /// Presence, emptiness or list-type violation
    Field,
    /// Date field not in ISO 8601 form
    Date,
    /// File name does not carry a date prefix
    Filename,
    /// File could not be read
    Io,
}

impl FailureCategory {
    /// Every category, in the order failures are reported
    pub const ALL: [FailureCategory; 6] = [
        FailureCategory::Structure,
        FailureCategory::Parse,
        FailureCategory::Field,
        FailureCategory::Date,
        FailureCategory::Filename,
        FailureCategory::Io,
    ];

    /// Get display name for category
    pub fn name(&self) -> &'static str {
        match self {
            FailureCategory::Structure => "Structure",
            FailureCategory::Parse => "Parse",
            FailureCategory::Field => "Field",
            FailureCategory::Date => "Date",
            FailureCategory::Filename => "Filename",
            FailureCategory::Io => "I/O",
        }
    }
}

/// Ordered failures for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub failures: Vec<Failure>,
}

impl ValidationReport {
    pub fn new(failures: Vec<Failure>) -> Self {
        Self { failures }
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    pub fn extend(&mut self, failures: impl IntoIterator<Item = Failure>) {
        self.failures.extend(failures);
    }

    /// Count failures in a category
    pub fn count_by_category(&self, category: FailureCategory) -> usize {
        self.failures
            .iter()
            .filter(|f| f.category() == category)
            .count()
    }

    /// Render every failure as its user-facing message
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    /// Format all failures for display, one per line
    pub fn format_failures(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("  - {}", f))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// JSON form of a single failure
#[derive(Debug, Clone, Serialize)]
pub struct JsonFailure {
    pub category: FailureCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl From<&Failure> for JsonFailure {
    fn from(failure: &Failure) -> Self {
        Self {
            category: failure.category(),
            field: failure.field().map(str::to_string),
            message: failure.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let failure = Failure::MissingField {
            field: "title".to_string(),
        };
        assert_eq!(failure.to_string(), "missing required field 'title'");
        assert_eq!(failure.field(), Some("title"));
        assert_eq!(failure.category(), FailureCategory::Field);
    }

    #[test]
    fn test_date_message_states_expectation() {
        let failure = Failure::InvalidDate {
            field: "date".to_string(),
            value: "Jan 15 2024".to_string(),
        };
        let message = failure.to_string();
        assert!(message.starts_with("invalid date format: 'Jan 15 2024'"));
        assert!(message.contains("YYYY-MM-DD"));
        assert_eq!(failure.field(), Some("date"));
    }

    #[test]
    fn test_json_date_failure_names_field() {
        let failure = Failure::InvalidDate {
            field: "published".to_string(),
            value: "someday".to_string(),
        };
        let json = serde_json::to_value(JsonFailure::from(&failure)).unwrap();
        assert_eq!(json["category"], "date");
        assert_eq!(json["field"], "published");
    }

    #[test]
    fn test_json_structure_failure_has_no_field() {
        let json = serde_json::to_value(JsonFailure::from(&Failure::MissingDelimiters)).unwrap();
        assert!(json.get("field").is_none());
    }

    #[test]
    fn test_report_counts_and_format() {
        let report = ValidationReport::new(vec![
            Failure::OrphanListItem {
                line: "- stray".to_string(),
            },
            Failure::EmptyList {
                field: "tags".to_string(),
            },
        ]);

        assert!(!report.is_valid());
        assert_eq!(report.count_by_category(FailureCategory::Parse), 1);
        assert_eq!(report.count_by_category(FailureCategory::Date), 0);
        assert_eq!(
            report.format_failures(),
            "  - list item without a preceding key: '- stray'\n  - field 'tags' is an empty list"
        );
    }

    #[test]
    fn test_json_failure() {
        let failure = Failure::NotAList {
            field: "tags".to_string(),
        };
        let json = serde_json::to_value(JsonFailure::from(&failure)).unwrap();
        assert_eq!(json["category"], "field");
        assert_eq!(json["field"], "tags");
        assert_eq!(json["message"], "field 'tags' should be a list");
    }
}
