use crate::models::{config::CONFIG_FILE, CheckConfig};
use crate::Result;
use colored::Colorize;
use std::env;
use std::path::Path;

pub fn run(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    write_default_config(&project_root, force)
}

fn write_default_config(project_root: &Path, force: bool) -> Result<()> {
    let config_path = project_root.join(CONFIG_FILE);

    if config_path.exists() && !force {
        println!("{}", format!("⚠️  {} already exists", CONFIG_FILE).yellow());
        println!("   Run with --force to overwrite");
        return Ok(());
    }

    CheckConfig::default().save(&config_path)?;
    println!("{}", format!("✓ Wrote {}", config_path.display()).green());
    Ok(())
}
