//! GeoTrail CLI - Command-line interface
//!
//! This binary provides a command-line interface to the GeoTrail library.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use geotrail::config::{config_file_path, ConfigFile};
use geotrail::logging::init_logging;

use commands::common::{Context, DocumentArgs};
use commands::config::ConfigCommands;
use commands::extract::ExtractArgs;
use commands::sample::SampleArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "geotrail")]
#[command(version, about = "Extract and map points from exported location history", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.geotrail/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a file matches its export format
    Validate(DocumentArgs),

    /// Show which regions contain points from a file
    Regions(DocumentArgs),

    /// Write the point layer of one region as GeoJSON
    Extract(ExtractArgs),

    /// List the configured regions
    ListRegions,

    /// Write a sample location history to try the other commands on
    Sample(SampleArgs),

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);

    match cli.command {
        Commands::Config { command } => return commands::config::run(command, &config_path),
        Commands::Sample(args) => return commands::sample::run(args),
        _ => {}
    }

    let config = ConfigFile::load_from(&config_path)?;
    let _logging_guard = init_logging(
        &config.logging.directory,
        &config.logging.file,
        &config.logging.level,
    )
    .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    tracing::debug!(config = %config_path.display(), "configuration loaded");

    let ctx = Context {
        config_path,
        config,
    };

    match cli.command {
        Commands::Validate(args) => commands::validate::run(args, &ctx),
        Commands::Regions(args) => commands::regions::run(args, &ctx),
        Commands::Extract(args) => commands::extract::run(args, &ctx),
        Commands::ListRegions => commands::list_regions::run(&ctx),
        Commands::Config { .. } | Commands::Sample(_) => Ok(()),
    }
}
