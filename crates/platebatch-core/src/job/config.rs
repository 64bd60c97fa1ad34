use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlateBatchError, Result};
use crate::manifest::ChannelLabels;
use crate::metadata::{Vendor, VendorAliases};

/// Everything needed to turn an experiment into LoadData files and commands.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobConfig {
    /// Experiment directory; every sub-directory is a plate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiment: Option<PathBuf>,
    /// CellProfiler pipeline (`.cppipe`).
    pub pipeline: PathBuf,
    /// Where `loaddata/` is written and results end up.
    pub location: PathBuf,
    /// Directory for the commands file.
    pub commands_location: PathBuf,
    /// Microscope tag, any alias accepted by [`VendorAliases`].
    #[serde(default = "default_microscope")]
    pub microscope: String,
    /// Imagesets per job. Unset means one job per plate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk: Option<usize>,
    /// Plate names to drop after discovery.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_plates: Vec<String>,
    /// Extra plates picked from other experiments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_plates: Vec<AddPlates>,
    /// Channel number -> label, used to name the FileName/PathName columns.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub channels: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddPlates {
    pub experiment: PathBuf,
    pub plates: Vec<String>,
}

fn default_microscope() -> String {
    Vendor::ImageXpress.name().to_string()
}

impl JobConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    pub fn vendor(&self, aliases: &VendorAliases) -> Result<Vendor> {
        aliases.resolve(&self.microscope)
    }

    /// Channel labels keyed by channel number, or `None` when unset.
    pub fn channel_labels(&self) -> Result<Option<ChannelLabels>> {
        if self.channels.is_empty() {
            return Ok(None);
        }
        self.channels
            .iter()
            .map(|(channel, label)| {
                channel
                    .trim()
                    .parse::<u32>()
                    .map(|c| (c, label.clone()))
                    .map_err(|_| PlateBatchError::parse(channel, "channel keys must be integers"))
            })
            .collect::<Result<ChannelLabels>>()
            .map(Some)
    }

    /// Check everything that can be checked without touching the filesystem.
    pub fn validate(&self, aliases: &VendorAliases) -> Result<Vendor> {
        let vendor = self.vendor(aliases)?;
        if let Some(size) = self.chunk {
            if size == 0 {
                return Err(PlateBatchError::InvalidChunkSize(size));
            }
        }
        if self.experiment.is_none() && self.add_plates.is_empty() {
            return Err(PlateBatchError::MissingConfig("experiment or add_plates"));
        }
        self.channel_labels()?;
        Ok(vendor)
    }
}
