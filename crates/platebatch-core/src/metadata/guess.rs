use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PlateBatchError, Result};

use super::Vendor;

/// `<name>_B02_s1_w1<uuid>.tif`
const IMAGEXPRESS_PATTERN: &str = r"^.+_[A-Za-z]\d{2}_s\d+_w\d[^_]*\.tif$";

/// `<plate>_C03_T0001F001L01A01Z01C01.tif`
const YOKOGAWA_PATTERN: &str = r"^[^_]+_[A-Za-z]\d{2}_T\d{4}F\d{3}L\d{2}A\d{2}Z\d{2}C\d{2}\.tif$";

/// `001002-1-001001001.tif`
const OPERA_PATTERN: &str = r"^\d{6}-\d+-\d{9}\.tif$";

static DEFAULT_GUESSER: LazyLock<VendorGuesser> = LazyLock::new(VendorGuesser::default);

/// Classifies image file names by vendor naming convention.
///
/// Patterns are tried in order against the file name only; a name is
/// recognised when exactly one pattern matches. The built-in patterns are
/// mutually exclusive, so [`guess_vendor`] never reports
/// [`PlateBatchError::AmbiguousFilename`]; only a guesser built with
/// overlapping patterns through [`VendorGuesser::new`] can.
#[derive(Clone, Debug)]
pub struct VendorGuesser {
    patterns: Vec<(Vendor, Regex)>,
}

impl VendorGuesser {
    pub fn new(patterns: Vec<(Vendor, Regex)>) -> Self {
        Self { patterns }
    }

    pub fn guess(&self, path: impl AsRef<Path>) -> Result<Vendor> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let matches: Vec<Vendor> = self
            .patterns
            .iter()
            .filter(|(_, re)| re.is_match(&name))
            .map(|(vendor, _)| *vendor)
            .collect();

        match matches.as_slice() {
            [vendor] => Ok(*vendor),
            [] => Err(PlateBatchError::UnrecognisedFilename(name)),
            _ => Err(PlateBatchError::AmbiguousFilename {
                name,
                candidates: matches
                    .iter()
                    .map(|v| v.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

impl Default for VendorGuesser {
    fn default() -> Self {
        let patterns = [
            (Vendor::ImageXpress, IMAGEXPRESS_PATTERN),
            (Vendor::Yokogawa, YOKOGAWA_PATTERN),
            (Vendor::Opera, OPERA_PATTERN),
        ];
        Self::new(
            patterns
                .into_iter()
                .map(|(vendor, pattern)| {
                    (vendor, Regex::new(pattern).expect("built-in pattern is valid"))
                })
                .collect(),
        )
    }
}

/// Guess the vendor of a single image path with the built-in patterns.
pub fn guess_vendor(path: impl AsRef<Path>) -> Result<Vendor> {
    DEFAULT_GUESSER.guess(path)
}
