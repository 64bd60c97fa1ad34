use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use platebatch_core::job::commands::LOADDATA_DIR;
use platebatch_core::job::config::JobConfig;
use platebatch_core::job::{run_job_reported, JobStage, ProgressReporter};
use platebatch_core::metadata::VendorAliases;
use tracing::debug;

use crate::summary::print_job_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Job config file (TOML)
    pub config: PathBuf,

    /// Override the number of imagesets per job
    #[arg(long)]
    pub chunk: Option<usize>,
}

/// Drives a single progress bar across job stages.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: JobStage, total_items: Option<usize>) {
        self.pb.reset();
        self.pb.set_length(total_items.unwrap_or(0) as u64);
        self.pb.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.pb.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.pb.length() {
            self.pb.set_position(len);
        }
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let mut config = JobConfig::load(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    if args.chunk.is_some() {
        debug!(chunk = ?args.chunk, "Overriding job size from the command line");
        config.chunk = args.chunk;
    }

    let aliases = VendorAliases::default();
    let vendor = config.validate(&aliases).context("Invalid job config")?;
    print_job_summary(&config, vendor);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { pb: pb.clone() });

    let output = run_job_reported(&config, &aliases, reporter)?;
    pb.finish_with_message("Done");

    println!(
        "\n{} plate(s), {} job(s)",
        output.plates,
        output.loaddata.len()
    );
    println!(
        "LoadData files in {}",
        config.location.join(LOADDATA_DIR).display()
    );
    println!("Commands saved to {}", output.commands_file.display());

    Ok(())
}
