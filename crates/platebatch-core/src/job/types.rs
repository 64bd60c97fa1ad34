/// Job preparation stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobStage {
    Listing,
    Manifests,
    Writing,
}

impl std::fmt::Display for JobStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Listing => write!(f, "Listing images"),
            Self::Manifests => write!(f, "Building manifests"),
            Self::Writing => write!(f, "Writing LoadData"),
        }
    }
}

/// Thread-safe progress reporting for job preparation.
///
/// Manifests are built on a rayon pool, so `advance` may be called from
/// several threads. All methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of plates or
    /// files in this stage, if known.
    fn begin_stage(&self, _stage: JobStage, _total_items: Option<usize>) {}

    /// `items_done` work items of the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_job` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
