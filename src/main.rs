use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use frontcheck::cli::{check::CheckArgs, file::FileArgs, schema::SchemaArgs};
use frontcheck::Result;
use std::io;

#[derive(Parser)]
#[command(name = "frontcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Frontmatter validator for blog posts", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every post in the content directory
    Check(CheckArgs),

    /// Validate specific files
    File(FileArgs),

    /// Show the frontmatter schema in effect
    Schema(SchemaArgs),

    /// Write a default frontcheck.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    frontcheck::init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when validation found problems
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check(args) => frontcheck::cli::check::run(args),

        Commands::File(args) => frontcheck::cli::file::run(args),

        Commands::Schema(args) => {
            frontcheck::cli::schema::run(args)?;
            Ok(true)
        }

        Commands::Init { force } => {
            frontcheck::cli::init::run(force)?;
            Ok(true)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "frontcheck", &mut io::stdout());
            Ok(true)
        }
    }
}
