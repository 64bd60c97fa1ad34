//! Positional metadata decoded from microscope image filenames.

mod decode;
mod guess;
mod vendor;
mod well;

use std::path::Path;

use serde::Serialize;

use crate::error::Result;

pub use decode::{ChannelDecoder, RecordDecoder};
pub use guess::{guess_vendor, VendorGuesser};
pub use vendor::{Vendor, VendorAliases};
pub use well::{column_from_well, row_from_well, well_from_row_column};

/// Metadata for one image plane.
///
/// Serialised field names follow CellProfiler's LoadData conventions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    #[serde(rename = "Metadata_well")]
    pub well: String,
    #[serde(rename = "Metadata_row")]
    pub row: u32,
    #[serde(rename = "Metadata_column")]
    pub column: u32,
    #[serde(rename = "Metadata_site")]
    pub site: u32,
    #[serde(rename = "Metadata_plate")]
    pub plate: String,
    #[serde(rename = "Metadata_z")]
    pub z: u32,
    #[serde(rename = "Metadata_channel")]
    pub channel: u32,
    /// Directory portion of the source path.
    pub path: String,
    /// Final path component.
    #[serde(rename = "URL")]
    pub file_name: String,
}

/// Filename parser bound to one vendor.
#[derive(Clone, Copy)]
pub struct MetadataParser {
    vendor: Vendor,
    record: RecordDecoder,
    channel: ChannelDecoder,
}

impl MetadataParser {
    pub fn new(vendor: Vendor) -> Self {
        let codec = decode::codec_for(vendor);
        Self {
            vendor,
            record: codec.record,
            channel: codec.channel,
        }
    }

    /// Resolve a user-supplied microscope tag through `aliases`.
    pub fn from_tag(tag: &str, aliases: &VendorAliases) -> Result<Self> {
        Ok(Self::new(aliases.resolve(tag)?))
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    pub fn parse_filepath(&self, path: impl AsRef<Path>) -> Result<ImageRecord> {
        (self.record)(path.as_ref())
    }

    /// Parse every path, stopping at the first malformed one.
    pub fn parse_filepath_list<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<ImageRecord>> {
        paths.iter().map(|p| self.parse_filepath(p)).collect()
    }

    /// Decode only the channel number.
    pub fn parse_channel(&self, path: impl AsRef<Path>) -> Result<u32> {
        (self.channel)(path.as_ref())
    }
}

impl std::fmt::Debug for MetadataParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataParser")
            .field("vendor", &self.vendor)
            .finish()
    }
}
