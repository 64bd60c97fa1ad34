use std::fmt;
use std::str::FromStr;

use crate::consts::{IX_FILE_DEPTH, OPERA_FILE_DEPTH, YOKO_FILE_DEPTH};
use crate::error::{PlateBatchError, Result};

/// Microscope vendor, which fixes both the on-disk layout and the filename
/// convention of a plate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vendor {
    /// Molecular Devices ImageXpress.
    ImageXpress,
    /// Yokogawa CV7000 / CV8000.
    Yokogawa,
    /// PerkinElmer Opera Phenix (Harmony / Columbus export).
    Opera,
}

impl Vendor {
    pub const ALL: [Vendor; 3] = [Vendor::ImageXpress, Vendor::Yokogawa, Vendor::Opera];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ImageXpress => "imagexpress",
            Self::Yokogawa => "yokogawa",
            Self::Opera => "opera",
        }
    }

    /// How many directory levels below the plate directory images live.
    pub fn file_depth(self) -> usize {
        match self {
            Self::ImageXpress => IX_FILE_DEPTH,
            Self::Yokogawa => YOKO_FILE_DEPTH,
            Self::Opera => OPERA_FILE_DEPTH,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageXpress => write!(f, "ImageXpress"),
            Self::Yokogawa => write!(f, "Yokogawa"),
            Self::Opera => write!(f, "Opera"),
        }
    }
}

impl FromStr for Vendor {
    type Err = PlateBatchError;

    fn from_str(s: &str) -> Result<Self> {
        VendorAliases::default().resolve(s)
    }
}

/// Table of accepted microscope spellings.
///
/// Built once and handed to whatever needs to turn a user-supplied tag into
/// a [`Vendor`]; lookups are case-insensitive and ignore surrounding
/// whitespace.
#[derive(Clone, Debug)]
pub struct VendorAliases {
    entries: Vec<(String, Vendor)>,
}

impl VendorAliases {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vendor)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(alias, vendor)| (alias.into().trim().to_lowercase(), vendor))
                .collect(),
        }
    }

    pub fn resolve(&self, tag: &str) -> Result<Vendor> {
        let key = tag.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, vendor)| *vendor)
            .ok_or_else(|| PlateBatchError::UnknownVendor {
                given: tag.to_string(),
                valid: self.aliases().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }
}

impl Default for VendorAliases {
    fn default() -> Self {
        Self::new([
            ("ix", Vendor::ImageXpress),
            ("imagexpress", Vendor::ImageXpress),
            ("imageexpress", Vendor::ImageXpress),
            ("moldev", Vendor::ImageXpress),
            ("moleculardevices", Vendor::ImageXpress),
            ("yoko", Vendor::Yokogawa),
            ("yokogawa", Vendor::Yokogawa),
            ("cv8000", Vendor::Yokogawa),
            ("cv7000", Vendor::Yokogawa),
            ("opera", Vendor::Opera),
            ("columbus", Vendor::Opera),
            ("harmony", Vendor::Opera),
        ])
    }
}
