use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use platebatch_core::filelist::paths_to_plates;

#[derive(Args)]
pub struct PlatesArgs {
    /// Experiment directory containing one sub-directory per plate
    pub experiment: PathBuf,
}

pub fn run(args: &PlatesArgs) -> Result<()> {
    let plates = paths_to_plates(&args.experiment)
        .with_context(|| format!("Failed to list plates in {}", args.experiment.display()))?;

    for plate in &plates {
        println!("{}", plate.display());
    }
    eprintln!("{} plate(s)", plates.len());

    Ok(())
}
