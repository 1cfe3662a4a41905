//! Service layer for frontcheck
//!
//! File-system work shared by the CLI commands: discovering posts and
//! running the validator over them.

pub mod content_service;

pub use content_service::{
    check_directory, check_file, check_filename, discover_files, CheckJsonOutput, CheckSummary,
    FileReport, JsonFileReport,
};
