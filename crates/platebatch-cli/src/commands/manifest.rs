use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use platebatch_core::filelist::PlateLister;
use platebatch_core::manifest::{
    build_long, reshape_wide, write_long_csv, write_wide_csv, ChannelLabels, DuplicatePolicy,
    ReshapeOptions,
};
use platebatch_core::metadata::VendorAliases;

#[derive(Args)]
pub struct ManifestArgs {
    /// Plate directory
    pub plate: PathBuf,

    /// Microscope that produced the plate (e.g. imagexpress, yokogawa, opera)
    #[arg(short, long, default_value = "imagexpress")]
    pub microscope: String,

    /// Channel labels as comma-separated NUMBER=LABEL pairs, e.g. 1=DNA,2=Actin
    #[arg(long, value_delimiter = ',')]
    pub channels: Vec<String>,

    /// Write one row per image instead of one row per imageset
    #[arg(long)]
    pub long: bool,

    /// Keep the first image when a channel appears twice in an imageset
    #[arg(long)]
    pub first_wins: bool,

    /// Skip the missing-value check
    #[arg(long)]
    pub no_null_check: bool,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ManifestArgs) -> Result<()> {
    let vendor = VendorAliases::default().resolve(&args.microscope)?;
    let labels = parse_channel_labels(&args.channels)?;

    let files = PlateLister::new(vendor)
        .files_from_plate(&args.plate)
        .with_context(|| format!("Failed to list images in {}", args.plate.display()))?;
    let long = build_long(&files, vendor)?;

    let out: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    if args.long {
        write_long_csv(&long, out)?;
        eprintln!("{} image(s)", long.len());
        return Ok(());
    }

    let options = ReshapeOptions {
        check_nulls: !args.no_null_check,
        duplicates: if args.first_wins {
            DuplicatePolicy::FirstWins
        } else {
            DuplicatePolicy::Reject
        },
    };
    let wide = reshape_wide(&long, labels.as_ref(), &options)
        .with_context(|| format!("Invalid manifest for {}", args.plate.display()))?;
    write_wide_csv(&wide, out)?;
    eprintln!(
        "{} imageset(s), {} channel(s) from {} image(s)",
        wide.len(),
        wide.channels().len(),
        long.len()
    );

    Ok(())
}

fn parse_channel_labels(pairs: &[String]) -> Result<Option<ChannelLabels>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    let mut labels = ChannelLabels::new();
    for pair in pairs {
        let Some((channel, label)) = pair.split_once('=') else {
            bail!("Channel label '{pair}' is not NUMBER=LABEL");
        };
        let channel: u32 = channel
            .trim()
            .parse()
            .with_context(|| format!("Channel '{channel}' is not a number"))?;
        labels.insert(channel, label.trim().to_string());
    }
    Ok(Some(labels))
}
