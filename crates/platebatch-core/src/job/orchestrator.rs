use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::manifest::save_wide_csv;
use crate::metadata::VendorAliases;

use super::commands::{
    cellprofiler_command, check_commands, loaddata_path, results_path, write_commands,
    LOADDATA_DIR,
};
use super::config::JobConfig;
use super::plan::Job;
use super::types::{JobStage, NoOpReporter, ProgressReporter};

/// Files produced by a job run.
#[derive(Clone, Debug)]
pub struct JobOutput {
    /// LoadData CSVs, in command order.
    pub loaddata: Vec<PathBuf>,
    pub commands_file: PathBuf,
    pub plates: usize,
}

/// Assemble the plate store described by `config`.
///
/// The config is validated before any directory is read.
pub fn plan_job(config: &JobConfig, aliases: &VendorAliases) -> Result<Job> {
    let vendor = config.validate(aliases)?;
    let mut job = Job::new(vendor);

    if let Some(ref experiment) = config.experiment {
        job.add_experiment(experiment)?;
    }
    if !config.remove_plates.is_empty() {
        job.remove_plates(&config.remove_plates)?;
    }
    for add in &config.add_plates {
        job.add_plates(&add.experiment, &add.plates)?;
    }
    if let Some(size) = config.chunk {
        job.chunk(size)?;
    }
    Ok(job)
}

/// Run the whole preparation with a thread-safe progress reporter:
/// list plates, build manifests, write LoadData CSVs and the commands file.
pub fn run_job_reported(
    config: &JobConfig,
    aliases: &VendorAliases,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<JobOutput> {
    let labels = config.channel_labels()?;

    reporter.begin_stage(JobStage::Listing, None);
    let job = plan_job(config, aliases)?;
    reporter.finish_stage();
    info!(
        vendor = %job.vendor(),
        plates = job.plates().len(),
        job_size = ?job.job_size(),
        "Job planned"
    );

    let manifests = job.build_manifests(labels.as_ref(), reporter.as_ref())?;

    reporter.begin_stage(JobStage::Writing, Some(manifests.len()));
    fs::create_dir_all(config.location.join(LOADDATA_DIR))?;
    let mut loaddata = Vec::with_capacity(manifests.len());
    let mut commands = Vec::with_capacity(manifests.len());
    for (i, job_manifest) in manifests.iter().enumerate() {
        let csv_path = loaddata_path(&config.location, &job_manifest.name);
        save_wide_csv(&job_manifest.manifest, &csv_path)?;
        commands.push(cellprofiler_command(
            &config.pipeline,
            &csv_path,
            &results_path(&config.location, &job_manifest.name),
        ));
        loaddata.push(csv_path);
        reporter.advance(i + 1);
    }

    let commands_file = write_commands(&config.commands_location, &commands)?;
    check_commands(&commands_file)?;
    reporter.finish_stage();
    info!(
        commands = commands.len(),
        file = %commands_file.display(),
        "Commands written"
    );

    Ok(JobOutput {
        loaddata,
        commands_file,
        plates: job.plates().len(),
    })
}

/// Run the whole preparation without progress reporting.
pub fn run_job(config: &JobConfig, aliases: &VendorAliases) -> Result<JobOutput> {
    run_job_reported(config, aliases, Arc::new(NoOpReporter))
}
