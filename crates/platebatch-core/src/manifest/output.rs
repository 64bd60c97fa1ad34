use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

use super::long::LongManifest;
use super::wide::WideManifest;

/// Write a wide manifest as CSV in the layout CellProfiler's LoadData expects.
pub fn write_wide_csv<W: Write>(manifest: &WideManifest, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(manifest.header())?;
    for record in manifest.records() {
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn save_wide_csv(manifest: &WideManifest, path: &Path) -> Result<()> {
    write_wide_csv(manifest, File::create(path)?)
}

/// Write one row per image, mostly useful for inspecting a plate.
pub fn write_long_csv<W: Write>(manifest: &LongManifest, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in manifest.records() {
        csv.serialize(record)?;
    }
    csv.flush()?;
    Ok(())
}
