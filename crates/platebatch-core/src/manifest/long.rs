use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Result;
use crate::metadata::{ImageRecord, MetadataParser, Vendor};

/// One row per image, in the order the paths were given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LongManifest {
    records: Vec<ImageRecord>,
}

impl LongManifest {
    pub fn new(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct channel numbers, ascending.
    pub fn channels(&self) -> Vec<u32> {
        self.records
            .iter()
            .map(|r| r.channel)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Parse every path into a long manifest.
pub fn build_long<P: AsRef<Path>>(paths: &[P], vendor: Vendor) -> Result<LongManifest> {
    let parser = MetadataParser::new(vendor);
    Ok(LongManifest::new(parser.parse_filepath_list(paths)?))
}
