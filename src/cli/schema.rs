use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Path to a config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Print the schema that `check` would apply
pub fn run(args: SchemaArgs) -> Result<()> {
    let schema = super::load_config(args.config.as_deref())?.schema;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    println!("{}", "Frontmatter schema:".green().bold());
    for rule in &schema.fields {
        let kind = if rule.list { "list" } else { "scalar" };
        let presence = if rule.required { "required" } else { "optional" };
        let date = if schema.date_field() == Some(rule.name.as_str()) {
            ", ISO 8601 date"
        } else {
            ""
        };
        println!("   • {} ({}, {}{})", rule.name.bold(), kind, presence, date);
    }

    Ok(())
}
