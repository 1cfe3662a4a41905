use crate::models::CheckConfig;
use crate::services::{check_directory, CheckSummary};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Content directory (default: content_dir from frontcheck.toml)
    pub dir: Option<PathBuf>,

    /// File extension to validate (e.g., "md")
    #[arg(long)]
    pub ext: Option<String>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Skip the YYYY-MM-DD-<title> file name check
    #[arg(long)]
    pub no_filename_check: bool,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Path to a config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckArgs {
    /// Command-line flags win over the config file
    pub fn apply(&self, mut config: CheckConfig) -> Result<CheckConfig> {
        if let Some(dir) = &self.dir {
            config.content_dir = dir.clone();
        }
        if let Some(ext) = &self.ext {
            config.extension = ext.clone();
        }
        if self.recursive {
            config.recursive = true;
        }
        if self.no_filename_check {
            config.check_filenames = false;
        }
        config.check()?;
        Ok(config)
    }
}

/// Returns whether every file passed
pub fn run(args: CheckArgs) -> Result<bool> {
    let config = args.apply(super::load_config(args.config.as_deref())?)?;
    let summary = check_directory(&config)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary.to_json_output())?
        );
    } else {
        print_summary(&summary);
    }

    Ok(summary.is_valid())
}

pub fn print_summary(summary: &CheckSummary) {
    let failed = summary.failed_files();

    if failed.is_empty() {
        println!(
            "{}",
            format!(
                "Validation PASSED: All {} files have valid frontmatter and filenames.",
                summary.total_files()
            )
            .green()
        );
        return;
    }

    println!(
        "{}",
        format!(
            "Validation FAILED: Found errors in {} out of {} files.",
            failed.len(),
            summary.total_files()
        )
        .red()
        .bold()
    );

    for file in failed {
        println!("\n{}", format!("[{}]", file.label).yellow());
        println!("{}", file.report.format_failures());
    }

    if let Some(breakdown) = category_breakdown(summary) {
        println!("\n{}", breakdown.dimmed());
    }
}

/// One-line failure totals, e.g. `Failures by category: Field 2, Filename 1`
fn category_breakdown(summary: &CheckSummary) -> Option<String> {
    let counts = summary.category_counts();
    if counts.is_empty() {
        return None;
    }

    let parts: Vec<String> = counts
        .iter()
        .map(|(category, count)| format!("{} {}", category.name(), count))
        .collect();
    Some(format!("Failures by category: {}", parts.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Failure, ValidationReport};
    use crate::services::FileReport;

    #[test]
    fn test_flags_override_config() {
        let args = CheckArgs {
            dir: Some(PathBuf::from("posts")),
            ext: Some("mdx".to_string()),
            recursive: true,
            no_filename_check: true,
            ..CheckArgs::default()
        };

        let config = args.apply(CheckConfig::default()).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("posts"));
        assert_eq!(config.extension(), "mdx");
        assert!(config.recursive);
        assert!(!config.check_filenames);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = CheckArgs::default().apply(CheckConfig::default()).unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn test_category_breakdown() {
        let report = |failures| FileReport {
            path: PathBuf::from("x.md"),
            label: "x.md".to_string(),
            report: ValidationReport::new(failures),
        };
        let summary = CheckSummary {
            files: vec![
                report(vec![
                    Failure::MissingField {
                        field: "title".to_string(),
                    },
                    Failure::Unreadable {
                        reason: "denied".to_string(),
                    },
                ]),
                report(vec![Failure::EmptyList {
                    field: "tags".to_string(),
                }]),
                report(vec![]),
            ],
        };

        assert_eq!(
            category_breakdown(&summary).as_deref(),
            Some("Failures by category: Field 2, I/O 1")
        );
        assert_eq!(category_breakdown(&CheckSummary::default()), None);
    }

    #[test]
    fn test_empty_extension_rejected() {
        let args = CheckArgs {
            ext: Some(".".to_string()),
            ..CheckArgs::default()
        };
        assert!(args.apply(CheckConfig::default()).is_err());
    }
}
