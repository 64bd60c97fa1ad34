use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PlateBatchError, Result};

/// Name of the commands file, one CellProfiler invocation per line.
pub const COMMANDS_FILE_NAME: &str = "cp_commands.txt";

/// Sub-directory of the job location holding the LoadData CSVs.
pub const LOADDATA_DIR: &str = "loaddata";

/// Sub-directory of the job location CellProfiler writes results into.
pub const RESULTS_DIR: &str = "raw_data";

pub fn loaddata_path(location: &Path, name: &str) -> PathBuf {
    location.join(LOADDATA_DIR).join(format!("{name}.csv"))
}

pub fn results_path(location: &Path, name: &str) -> PathBuf {
    location.join(RESULTS_DIR).join(name)
}

/// Headless CellProfiler run of `pipeline` over one LoadData file.
pub fn cellprofiler_command(pipeline: &Path, load_data: &Path, output: &Path) -> String {
    format!(
        "cellprofiler -r -c -p {} --data-file={} -o {}",
        pipeline.display(),
        load_data.display(),
        output.display()
    )
}

/// Write `commands` to `<dir>/cp_commands.txt`, newline-terminated.
pub fn write_commands(dir: &Path, commands: &[String]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(COMMANDS_FILE_NAME);
    let mut out = BufWriter::new(fs::File::create(&path)?);
    for command in commands {
        writeln!(out, "{command}")?;
    }
    out.flush()?;
    Ok(path)
}

/// An empty commands file means nothing would run on the cluster.
pub fn check_commands(path: &Path) -> Result<usize> {
    let lines = fs::read_to_string(path)?
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count();
    if lines == 0 {
        return Err(PlateBatchError::EmptyCommands(path.to_path_buf()));
    }
    Ok(lines)
}
