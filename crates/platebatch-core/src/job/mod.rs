pub mod commands;
pub mod config;
mod orchestrator;
mod plan;
mod types;

pub use orchestrator::{plan_job, run_job, run_job_reported, JobOutput};
pub use plan::{Job, JobManifest, PlateEntry};
pub use types::{JobStage, ProgressReporter};
