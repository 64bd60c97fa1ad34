//! Grouping of image paths into imagesets and imagesets into jobs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{PlateBatchError, Result};
use crate::metadata::{MetadataParser, Vendor};

/// Paths belonging to one (well, site), ordered by channel.
pub type ImagesetGroup = Vec<PathBuf>;

/// Group paths by (well, site).
///
/// Groups come out sorted by well label and then numeric site; inside a
/// group the paths are stably sorted by channel number.
pub fn group_by_well_site<P: AsRef<Path>>(
    paths: &[P],
    vendor: Vendor,
) -> Result<Vec<ImagesetGroup>> {
    let parser = MetadataParser::new(vendor);
    let mut groups: BTreeMap<(String, u32), Vec<(u32, PathBuf)>> = BTreeMap::new();

    for path in paths {
        let path = path.as_ref();
        let record = parser.parse_filepath(path)?;
        groups
            .entry((record.well, record.site))
            .or_default()
            .push((record.channel, path.to_path_buf()));
    }

    Ok(groups
        .into_values()
        .map(|mut group| {
            group.sort_by_key(|(channel, _)| *channel);
            group.into_iter().map(|(_, path)| path).collect()
        })
        .collect())
}

/// Split `items` into consecutive runs of `size`; the last run may be short.
pub fn chunks<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(PlateBatchError::InvalidChunkSize(size));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Group image paths into imagesets and batch them `job_size` at a time.
pub fn split<P: AsRef<Path>>(
    paths: &[P],
    job_size: usize,
    vendor: Vendor,
) -> Result<Vec<Vec<ImagesetGroup>>> {
    if job_size == 0 {
        return Err(PlateBatchError::InvalidChunkSize(job_size));
    }
    let groups = group_by_well_site(paths, vendor)?;
    chunks(&groups, job_size)
}
