use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{PlateBatchError, Result};
use crate::filelist::{paths_to_plates, PlateLister};
use crate::manifest::{build_wide, ChannelLabels, WideManifest};
use crate::metadata::Vendor;
use crate::split::split;

use super::types::{JobStage, ProgressReporter};

/// A plate directory and its image files.
#[derive(Clone, Debug)]
pub struct PlateEntry {
    pub dir: PathBuf,
    pub images: Vec<PathBuf>,
}

impl PlateEntry {
    /// Directory the listed image paths are relative to.
    fn image_root(&self) -> &Path {
        self.dir.parent().unwrap_or(&self.dir)
    }
}

/// The manifest of one cluster task.
#[derive(Clone, Debug)]
pub struct JobManifest {
    /// `<plate>_<index>`, unique across the job.
    pub name: String,
    pub plate: String,
    pub manifest: WideManifest,
}

/// Collection of plates to be analysed, keyed by plate name.
#[derive(Clone, Debug)]
pub struct Job {
    vendor: Vendor,
    lister: PlateLister,
    plates: BTreeMap<String, PlateEntry>,
    job_size: Option<usize>,
}

impl Job {
    pub fn new(vendor: Vendor) -> Self {
        Self {
            vendor,
            lister: PlateLister::new(vendor),
            plates: BTreeMap::new(),
            job_size: None,
        }
    }

    pub fn vendor(&self) -> Vendor {
        self.vendor
    }

    pub fn plates(&self) -> &BTreeMap<String, PlateEntry> {
        &self.plates
    }

    pub fn job_size(&self) -> Option<usize> {
        self.job_size
    }

    /// Add every plate directory found in `experiment_dir`.
    pub fn add_experiment(&mut self, experiment_dir: &Path) -> Result<()> {
        for dir in paths_to_plates(experiment_dir)? {
            self.insert_plate(dir)?;
        }
        info!(
            experiment = %experiment_dir.display(),
            plates = self.plates.len(),
            "Added experiment"
        );
        Ok(())
    }

    /// Add named plates from one experiment directory.
    pub fn add_plates<S: AsRef<str>>(&mut self, experiment_dir: &Path, plates: &[S]) -> Result<()> {
        for plate in plates {
            self.insert_plate(experiment_dir.join(plate.as_ref()))?;
        }
        Ok(())
    }

    pub fn remove_plates<S: AsRef<str>>(&mut self, plates: &[S]) -> Result<()> {
        for plate in plates {
            let plate = plate.as_ref();
            if self.plates.remove(plate).is_none() {
                return Err(PlateBatchError::UnknownPlate(plate.to_string()));
            }
            debug!(plate, "Removed plate");
        }
        Ok(())
    }

    /// Split every plate into jobs of `job_size` imagesets.
    pub fn chunk(&mut self, job_size: usize) -> Result<()> {
        if job_size == 0 {
            return Err(PlateBatchError::InvalidChunkSize(job_size));
        }
        self.job_size = Some(job_size);
        Ok(())
    }

    fn insert_plate(&mut self, dir: PathBuf) -> Result<()> {
        if !dir.is_dir() {
            return Err(PlateBatchError::DirectoryNotFound(dir));
        }
        // Absolute, so re-rooting manifest paths never doubles a prefix.
        let dir = std::fs::canonicalize(dir)?;
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| PlateBatchError::DirectoryNotFound(dir.clone()))?;
        let images = self.lister.files_from_plate(&dir)?;
        debug!(plate = %name, images = images.len(), "Added plate");
        self.plates.insert(name, PlateEntry { dir, images });
        Ok(())
    }

    /// Build one manifest per job, plates in name order.
    ///
    /// Plates are processed in parallel. When chunked, every job except a
    /// plate's last must cover exactly `job_size` (well, site) pairs; each
    /// pair contributes one row per z-plane.
    pub fn build_manifests(
        &self,
        labels: Option<&ChannelLabels>,
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<JobManifest>> {
        reporter.begin_stage(JobStage::Manifests, Some(self.plates.len()));
        let done = AtomicUsize::new(0);

        let per_plate = self
            .plates
            .par_iter()
            .map(|(plate, entry)| {
                let manifests = self.plate_manifests(plate, entry, labels)?;
                reporter.advance(done.fetch_add(1, Ordering::Relaxed) + 1);
                Ok(manifests)
            })
            .collect::<Result<Vec<_>>>()?;

        reporter.finish_stage();
        let manifests: Vec<JobManifest> = per_plate.into_iter().flatten().collect();
        info!(
            plates = self.plates.len(),
            jobs = manifests.len(),
            "Manifests built"
        );
        Ok(manifests)
    }

    fn plate_manifests(
        &self,
        plate: &str,
        entry: &PlateEntry,
        labels: Option<&ChannelLabels>,
    ) -> Result<Vec<JobManifest>> {
        let root = entry.image_root();
        let named = |index: usize, mut manifest: WideManifest| {
            manifest.prefix_paths(root);
            JobManifest {
                name: format!("{plate}_{index}"),
                plate: plate.to_string(),
                manifest,
            }
        };

        let Some(job_size) = self.job_size else {
            let manifest = build_wide(&entry.images, self.vendor, labels)?;
            return Ok(vec![named(0, manifest)]);
        };

        let chunks = split(&entry.images, job_size, self.vendor)?;
        let last = chunks.len().saturating_sub(1);
        chunks
            .into_iter()
            .enumerate()
            .map(|(index, chunk)| {
                let images: Vec<PathBuf> = chunk.into_iter().flatten().collect();
                let manifest = build_wide(&images, self.vendor, labels)?;
                let sites = manifest.site_count();
                if index < last && sites != job_size {
                    return Err(PlateBatchError::ChunkSize {
                        job: format!("{plate}_{index}"),
                        expected: job_size,
                        actual: sites,
                    });
                }
                Ok(named(index, manifest))
            })
            .collect()
    }
}
