//! LoadData manifests: long (per image) and wide (per imageset) tables.

mod long;
mod output;
mod wide;

pub use long::{build_long, LongManifest};
pub use output::{save_wide_csv, write_long_csv, write_wide_csv};
pub use wide::{
    build_wide, reshape_wide, ChannelColumn, ChannelFile, ChannelLabels, DuplicatePolicy,
    ImagesetKey, ImagesetRow, ReshapeOptions, WideManifest,
};

/// Imageset metadata columns, in output order.
pub const METADATA_COLUMNS: [&str; 6] = [
    "Metadata_well",
    "Metadata_row",
    "Metadata_column",
    "Metadata_site",
    "Metadata_plate",
    "Metadata_z",
];
