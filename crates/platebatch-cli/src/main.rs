mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "platebatch", about = "Prepare CellProfiler batch jobs from microscope plates")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the plate directories of an experiment
    Plates(commands::plates::PlatesArgs),
    /// List the image files of a plate
    Files(commands::files::FilesArgs),
    /// Guess which microscope produced an image file
    Guess(commands::guess::GuessArgs),
    /// Build the LoadData manifest of a single plate
    Manifest(commands::manifest::ManifestArgs),
    /// Write LoadData files and CellProfiler commands for a job config
    Run(commands::run::RunArgs),
    /// Print a default job config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Plates(args) => commands::plates::run(args),
        Commands::Files(args) => commands::files::run(args),
        Commands::Guess(args) => commands::guess::run(args),
        Commands::Manifest(args) => commands::manifest::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
