//! Discovery of image files and plate directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::consts::{
    IMAGE_EXTENSION, IX_EXCLUDE_MARKER, IX_PATH_COMPONENTS, YOKO_EXCLUDE_CAMERA,
    YOKO_EXCLUDE_SECONDARY,
};
use crate::error::{PlateBatchError, Result};
use crate::metadata::Vendor;

/// Lists the image files of a plate according to one vendor's layout.
#[derive(Clone, Copy, Debug)]
pub struct PlateLister {
    vendor: Vendor,
}

impl PlateLister {
    pub fn new(vendor: Vendor) -> Self {
        Self { vendor }
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    /// All usable image files of a plate, sorted. Symlinked files and
    /// directories are followed.
    ///
    /// ImageXpress paths are cut down to `plate/date/run/file` so they can be
    /// re-rooted on another machine; other vendors keep the walked path.
    pub fn files_from_plate(&self, plate_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let plate_dir = plate_dir.as_ref();
        if !plate_dir.is_dir() {
            return Err(PlateBatchError::DirectoryNotFound(plate_dir.to_path_buf()));
        }

        let depth = self.vendor.file_depth();
        let mut files = Vec::new();
        for entry in WalkDir::new(plate_dir)
            .follow_links(true)
            .min_depth(depth)
            .max_depth(depth)
            .sort_by_file_name()
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        let found = files.len();

        let mut files = self.clean_filelist(files);
        if self.vendor == Vendor::ImageXpress {
            files = files.iter().map(|f| last_components(f, IX_PATH_COMPONENTS)).collect();
        }
        debug!(
            plate = %plate_dir.display(),
            found,
            kept = files.len(),
            "Listed plate images"
        );

        if files.is_empty() {
            return Err(PlateBatchError::NoImages(plate_dir.to_path_buf()));
        }
        Ok(files)
    }

    /// Keep only image planes, dropping thumbnails and vendor side files.
    pub fn clean_filelist(&self, files: Vec<PathBuf>) -> Vec<PathBuf> {
        files
            .into_iter()
            .filter(|f| {
                let Some(name) = f.file_name().map(|n| n.to_string_lossy()) else {
                    return false;
                };
                name.ends_with(IMAGE_EXTENSION) && !self.is_excluded(&name)
            })
            .collect()
    }

    fn is_excluded(&self, name: &str) -> bool {
        match self.vendor {
            Vendor::ImageXpress => name.contains(IX_EXCLUDE_MARKER),
            Vendor::Yokogawa => {
                name.contains(YOKO_EXCLUDE_CAMERA) || name.contains(YOKO_EXCLUDE_SECONDARY)
            }
            Vendor::Opera => false,
        }
    }
}

/// Absolute paths of the plate directories inside an experiment, sorted.
/// Plain files at the top level are ignored.
pub fn paths_to_plates(experiment_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let experiment_dir = experiment_dir.as_ref();
    if !experiment_dir.is_dir() {
        return Err(PlateBatchError::DirectoryNotFound(
            experiment_dir.to_path_buf(),
        ));
    }
    let experiment_dir = fs::canonicalize(experiment_dir)?;

    let mut plates = Vec::new();
    for entry in fs::read_dir(&experiment_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            plates.push(path);
        }
    }
    plates.sort();
    Ok(plates)
}

fn last_components(path: &Path, n: usize) -> PathBuf {
    let parts: Vec<_> = path.components().collect();
    parts[parts.len().saturating_sub(n)..].iter().collect()
}
