use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use platebatch_core::consts::DEFAULT_JOB_SIZE;
use platebatch_core::job::config::JobConfig;
use platebatch_core::metadata::Vendor;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default JobConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = JobConfig {
        experiment: Some(PathBuf::from("/path/to/experiment")),
        pipeline: PathBuf::from("/path/to/pipeline.cppipe"),
        location: PathBuf::from("/path/to/output"),
        commands_location: PathBuf::from("/path/to/commands"),
        microscope: Vendor::ImageXpress.name().to_string(),
        chunk: Some(DEFAULT_JOB_SIZE),
        remove_plates: vec![],
        add_plates: vec![],
        channels: BTreeMap::from([
            ("1".to_string(), "W1".to_string()),
            ("2".to_string(), "W2".to_string()),
        ]),
    };
    let toml_str = config.to_toml()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
