use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlateBatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Unknown microscope '{given}', options = [{valid}]")]
    UnknownVendor { given: String, valid: String },

    #[error("Invalid chunk size {0}: must be at least 1")]
    InvalidChunkSize(usize),

    #[error("Missing config field: {0}")]
    MissingConfig(&'static str),

    #[error("Plate '{0}' is not in the plate store")]
    UnknownPlate(String),

    #[error("'{}' directory not found", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No files found in '{}'", .0.display())]
    NoImages(PathBuf),

    #[error("Cannot parse '{path}': {reason}")]
    Parse { path: String, reason: String },

    #[error("Unrecognised image filename '{0}'")]
    UnrecognisedFilename(String),

    #[error("Ambiguous image filename '{name}', matches: {candidates}")]
    AmbiguousFilename { name: String, candidates: String },

    #[error("Manifest row {row} has a missing value for '{field}'")]
    MissingValue { row: usize, field: &'static str },

    #[error("Duplicate channel {channel} for well {well}, site {site}, z {z}")]
    DuplicateChannel {
        well: String,
        site: u32,
        z: u32,
        channel: u32,
    },

    #[error("Well {well}, site {site}, z {z} has no image for channel {channel}")]
    MissingChannel {
        well: String,
        site: u32,
        z: u32,
        channel: u32,
    },

    #[error(
        "Manifest has an unexpected number of rows, expected: {expected}, got: {actual}{}",
        size_hint(.expected, .actual)
    )]
    ManifestSize { expected: usize, actual: usize },

    #[error("Job {job} covers {actual} well/site pairs, expected {expected}")]
    ChunkSize {
        job: String,
        expected: usize,
        actual: usize,
    },

    #[error("Empty manifest")]
    EmptyManifest,

    #[error("Commands file '{}' is empty", .0.display())]
    EmptyCommands(PathBuf),
}

fn size_hint(expected: &usize, actual: &usize) -> &'static str {
    if actual > expected {
        "\nDo your images have the same number of z-planes per channel?"
    } else {
        ""
    }
}

impl PlateBatchError {
    pub(crate) fn parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlateBatchError>;
