use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use platebatch_core::metadata::guess_vendor;

#[derive(Args)]
pub struct GuessArgs {
    /// Image files to classify
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &GuessArgs) -> Result<()> {
    for file in &args.files {
        let vendor = guess_vendor(file)?;
        println!("{:<12} {}", vendor.name(), file.display());
    }
    Ok(())
}
