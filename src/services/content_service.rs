//! Content service - file discovery and per-file validation
//!
//! Everything here touches the file system; the validation rules themselves
//! live in [`crate::validator`] and only ever see document text.

use crate::models::{CheckConfig, Failure, FailureCategory, JsonFailure, ValidationReport};
use crate::validator::FrontmatterValidator;
use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Date-prefixed post name, extension already removed
static FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}-.+$").expect("filename pattern is valid"));

/// Validation outcome for one file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// Path shown to the user, relative to the content directory
    pub label: String,
    pub report: ValidationReport,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

/// Results for a whole content directory
#[derive(Debug, Clone, Default)]
pub struct CheckSummary {
    pub files: Vec<FileReport>,
}

impl CheckSummary {
    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    /// Files with at least one failure, sorted by label
    pub fn failed_files(&self) -> Vec<&FileReport> {
        let mut failed: Vec<&FileReport> = self.files.iter().filter(|f| !f.is_valid()).collect();
        failed.sort_by(|a, b| a.label.cmp(&b.label));
        failed
    }

    pub fn is_valid(&self) -> bool {
        self.files.iter().all(FileReport::is_valid)
    }

    /// Failure totals across all files, non-zero categories only
    pub fn category_counts(&self) -> Vec<(FailureCategory, usize)> {
        FailureCategory::ALL
            .into_iter()
            .map(|category| {
                let count: usize = self
                    .files
                    .iter()
                    .map(|f| f.report.count_by_category(category))
                    .sum();
                (category, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Convert to JSON output format
    pub fn to_json_output(&self) -> CheckJsonOutput {
        CheckJsonOutput {
            valid: self.is_valid(),
            total_files: self.total_files(),
            failed_files: self.failed_files().len(),
            files: self
                .failed_files()
                .into_iter()
                .map(|f| JsonFileReport {
                    file: f.label.clone(),
                    failures: f.report.failures.iter().map(JsonFailure::from).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckJsonOutput {
    pub valid: bool,
    pub total_files: usize,
    pub failed_files: usize,
    pub files: Vec<JsonFileReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonFileReport {
    pub file: String,
    pub failures: Vec<JsonFailure>,
}

/// List files with `extension` under `dir`, sorted by path
///
/// Only the top level is scanned unless `recursive` is set. Entries that
/// cannot be read are logged and skipped.
pub fn discover_files(dir: &Path, extension: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Directory {} not found.", dir.display());
    }

    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }

    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered content files");
    Ok(files)
}

/// Check the `YYYY-MM-DD-<title>.<ext>` naming convention
pub fn check_filename(filename: &str, extension: &str) -> Option<Failure> {
    let stem = filename.strip_suffix(extension).and_then(|s| s.strip_suffix('.'));

    match stem {
        Some(stem) if FILENAME_RE.is_match(stem) => None,
        _ => Some(Failure::FilenameConvention {
            filename: filename.to_string(),
            extension: extension.to_string(),
        }),
    }
}

/// Validate a single file, optionally including the naming convention
pub fn check_file(
    path: &Path,
    validator: &FrontmatterValidator,
    filename_extension: Option<&str>,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(extension) = filename_extension {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        report.extend(check_filename(&filename, extension));
    }

    match std::fs::read_to_string(path) {
        Ok(content) => report.extend(validator.validate(&content).failures),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read file");
            report.push(Failure::Unreadable {
                reason: e.to_string(),
            });
        }
    }

    tracing::debug!(
        path = %path.display(),
        failures = report.failures.len(),
        "validated file"
    );
    report
}

/// Discover and validate every content file described by `config`
pub fn check_directory(config: &CheckConfig) -> Result<CheckSummary> {
    let extension = config.extension();
    let validator = FrontmatterValidator::new(config.schema.clone());
    let filename_extension = config.check_filenames.then_some(extension);

    let files = discover_files(&config.content_dir, extension, config.recursive)?
        .into_iter()
        .map(|path| {
            let report = check_file(&path, &validator, filename_extension);
            let label = path
                .strip_prefix(&config.content_dir)
                .unwrap_or(&path)
                .display()
                .to_string();
            FileReport {
                path,
                label,
                report,
            }
        })
        .collect();

    Ok(CheckSummary { files })
}
