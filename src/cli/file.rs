//! Validate individual files

use crate::services::{check_file, CheckSummary, FileReport};
use crate::validator::FrontmatterValidator;
use crate::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Files to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Also check the YYYY-MM-DD-<title> file name convention
    #[arg(long)]
    pub filenames: bool,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Path to a config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Returns whether every file passed
pub fn run(args: FileArgs) -> Result<bool> {
    let config = super::load_config(args.config.as_deref())?;
    let validator = FrontmatterValidator::new(config.schema.clone());
    let filename_extension = args.filenames.then(|| config.extension());

    let files = args
        .paths
        .iter()
        .map(|path| FileReport {
            path: path.clone(),
            label: path.display().to_string(),
            report: check_file(path, &validator, filename_extension),
        })
        .collect();
    let summary = CheckSummary { files };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary.to_json_output())?
        );
    } else {
        super::check::print_summary(&summary);
    }

    Ok(summary.is_valid())
}
