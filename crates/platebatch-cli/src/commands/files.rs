use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use platebatch_core::filelist::PlateLister;
use platebatch_core::metadata::VendorAliases;

#[derive(Args)]
pub struct FilesArgs {
    /// Plate directory
    pub plate: PathBuf,

    /// Microscope that produced the plate (e.g. imagexpress, yokogawa, opera)
    #[arg(short, long, default_value = "imagexpress")]
    pub microscope: String,
}

pub fn run(args: &FilesArgs) -> Result<()> {
    let vendor = VendorAliases::default().resolve(&args.microscope)?;
    let files = PlateLister::new(vendor)
        .files_from_plate(&args.plate)
        .with_context(|| format!("Failed to list images in {}", args.plate.display()))?;

    for file in &files {
        println!("{}", file.display());
    }
    eprintln!("{} {} image(s)", files.len(), vendor);

    Ok(())
}
