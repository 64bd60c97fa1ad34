use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{PlateBatchError, Result};
use crate::metadata::{ImageRecord, Vendor};

use super::long::{build_long, LongManifest};
use super::METADATA_COLUMNS;

/// Optional mapping from channel number to a human-readable label.
pub type ChannelLabels = BTreeMap<u32, String>;

/// What to do when two images claim the same channel of one imageset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail with [`PlateBatchError::DuplicateChannel`].
    #[default]
    Reject,
    /// Keep the first image seen, ignore the rest.
    FirstWins,
}

#[derive(Clone, Debug)]
pub struct ReshapeOptions {
    /// Fail on records with an empty well, plate or file name.
    pub check_nulls: bool,
    pub duplicates: DuplicatePolicy,
}

impl Default for ReshapeOptions {
    fn default() -> Self {
        Self {
            check_nulls: true,
            duplicates: DuplicatePolicy::Reject,
        }
    }
}

/// Identity of one imageset; also the sort order of wide manifest rows.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImagesetKey {
    pub well: String,
    pub row: u32,
    pub column: u32,
    pub site: u32,
    pub plate: String,
    pub z: u32,
}

impl From<&ImageRecord> for ImagesetKey {
    fn from(r: &ImageRecord) -> Self {
        Self {
            well: r.well.clone(),
            row: r.row,
            column: r.column,
            site: r.site,
            plate: r.plate.clone(),
            z: r.z,
        }
    }
}

/// File name and directory of one channel image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelFile {
    pub file_name: String,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelColumn {
    pub channel: u32,
    pub label: String,
}

impl ChannelColumn {
    pub fn file_name_header(&self) -> String {
        format!("FileName_{}", self.label)
    }

    pub fn path_name_header(&self) -> String {
        format!("PathName_{}", self.label)
    }
}

/// One imageset; `files[i]` belongs to `WideManifest::channels()[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagesetRow {
    pub key: ImagesetKey,
    pub files: Vec<ChannelFile>,
}

/// One row per imageset with a FileName/PathName pair per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideManifest {
    channels: Vec<ChannelColumn>,
    rows: Vec<ImagesetRow>,
}

impl WideManifest {
    pub fn channels(&self) -> &[ChannelColumn] {
        &self.channels
    }

    pub fn rows(&self) -> &[ImagesetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct (well, site) pairs; z-planes of one site count once.
    pub fn site_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| (r.key.well.as_str(), r.key.site))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Metadata columns, then every FileName column, then every PathName column.
    pub fn header(&self) -> Vec<String> {
        METADATA_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(self.channels.iter().map(ChannelColumn::file_name_header))
            .chain(self.channels.iter().map(ChannelColumn::path_name_header))
            .collect()
    }

    /// Cell values of each row, aligned with [`header`](Self::header).
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|row| {
            let k = &row.key;
            [
                k.well.clone(),
                k.row.to_string(),
                k.column.to_string(),
                k.site.to_string(),
                k.plate.clone(),
                k.z.to_string(),
            ]
            .into_iter()
            .chain(row.files.iter().map(|f| f.file_name.clone()))
            .chain(row.files.iter().map(|f| f.path.clone()))
            .collect()
        })
    }

    /// Re-root every PathName under `root`. Absolute paths are left alone.
    pub fn prefix_paths(&mut self, root: &Path) {
        for file in self.rows.iter_mut().flat_map(|r| r.files.iter_mut()) {
            file.path = root.join(&file.path).to_string_lossy().into_owned();
        }
    }
}

/// Pivot a long manifest into one row per imageset.
///
/// Fails when the result does not hold exactly `long.len() / channels` rows,
/// which is how missing channels and uneven z-stacks show up.
pub fn reshape_wide(
    long: &LongManifest,
    labels: Option<&ChannelLabels>,
    options: &ReshapeOptions,
) -> Result<WideManifest> {
    if options.check_nulls {
        check_missing_values(long.records())?;
    }
    if long.is_empty() {
        return Err(PlateBatchError::EmptyManifest);
    }

    let channels = long.channels();
    let slot: HashMap<u32, usize> = channels.iter().enumerate().map(|(i, c)| (*c, i)).collect();

    let mut imagesets: BTreeMap<ImagesetKey, Vec<Option<ChannelFile>>> = BTreeMap::new();
    for record in long.records() {
        let cells = imagesets
            .entry(ImagesetKey::from(record))
            .or_insert_with(|| vec![None; channels.len()]);
        let cell = &mut cells[slot[&record.channel]];
        if cell.is_some() {
            match options.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(PlateBatchError::DuplicateChannel {
                        well: record.well.clone(),
                        site: record.site,
                        z: record.z,
                        channel: record.channel,
                    })
                }
                DuplicatePolicy::FirstWins => {
                    warn!(
                        well = %record.well,
                        site = record.site,
                        channel = record.channel,
                        file = %record.file_name,
                        "Duplicate channel image ignored"
                    );
                    continue;
                }
            }
        }
        *cell = Some(ChannelFile {
            file_name: record.file_name.clone(),
            path: record.path.clone(),
        });
    }

    let expected = long.len() / channels.len();
    if imagesets.len() != expected {
        return Err(PlateBatchError::ManifestSize {
            expected,
            actual: imagesets.len(),
        });
    }

    let rows = imagesets
        .into_iter()
        .map(|(key, cells)| {
            let files = cells
                .into_iter()
                .zip(&channels)
                .map(|(cell, channel)| {
                    cell.ok_or_else(|| PlateBatchError::MissingChannel {
                        well: key.well.clone(),
                        site: key.site,
                        z: key.z,
                        channel: *channel,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ImagesetRow { key, files })
        })
        .collect::<Result<Vec<_>>>()?;

    let channels = channels
        .into_iter()
        .map(|channel| ChannelColumn {
            channel,
            label: channel_label(channel, labels),
        })
        .collect();

    debug!(rows = rows.len(), images = long.len(), "Reshaped manifest");
    Ok(WideManifest { channels, rows })
}

/// Parse `paths` and reshape them into a wide manifest with default checks.
pub fn build_wide<P: AsRef<Path>>(
    paths: &[P],
    vendor: Vendor,
    labels: Option<&ChannelLabels>,
) -> Result<WideManifest> {
    let long = build_long(paths, vendor)?;
    reshape_wide(&long, labels, &ReshapeOptions::default())
}

fn channel_label(channel: u32, labels: Option<&ChannelLabels>) -> String {
    match labels.map(|l| l.get(&channel)) {
        Some(Some(label)) => label.clone(),
        Some(None) => {
            warn!(channel, "No label configured for channel, using default name");
            format!("W{channel}")
        }
        None => format!("W{channel}"),
    }
}

fn check_missing_values(records: &[ImageRecord]) -> Result<()> {
    for (row, r) in records.iter().enumerate() {
        let missing = if r.well.trim().is_empty() {
            Some("Metadata_well")
        } else if r.plate.trim().is_empty() {
            Some("Metadata_plate")
        } else if r.file_name.trim().is_empty() {
            Some("URL")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(PlateBatchError::MissingValue { row, field });
        }
    }
    Ok(())
}
