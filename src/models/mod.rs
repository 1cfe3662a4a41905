pub mod config;
pub mod metadata;
pub mod schema;
pub mod validation;

pub use config::CheckConfig;
pub use metadata::{FieldValue, Metadata};
pub use schema::{FieldRule, Schema};
pub use validation::{Failure, FailureCategory, JsonFailure, ValidationReport};
