// Frontcheck - Frontmatter validation for static blog content
// A dependency-light CI gate that catches malformed posts before publication

pub mod cli;
pub mod models;
pub mod parser;
pub mod services;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{
    CheckConfig, Failure, FailureCategory, FieldRule, FieldValue, Metadata, Schema,
    ValidationReport,
};
pub use validator::FrontmatterValidator;

/// Validate one document against the default blog post schema
///
/// Returns the failure messages in report order; an empty vector means the
/// document is valid.
pub fn validate(document_text: &str) -> Vec<String> {
    FrontmatterValidator::default()
        .validate(document_text)
        .messages()
}

/// Initialize logging (safe to call more than once)
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output.
pub fn init_logging(verbose: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let default_filter = if verbose { "frontcheck=debug" } else { "frontcheck=warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        // Fails silently if a subscriber is already installed
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
