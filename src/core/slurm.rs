//! SLURM batch-file generation for array runs on the cluster.

use crate::error::{Error, Result};
use crate::log_status;
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};
use crate::utils::validation;
use serde::Serialize;
use std::path::Path;

pub const DEFAULT_TIME: &str = "10:00:00";
pub const DEFAULT_MEM_MB: u32 = 4000;
pub const DEFAULT_BUILD_DIR: &str = "/mnt/lustre/projects/ft13/ttay0006/evobee/code/evobee/build";

const SLURM_TEMPLATE: &str = "#!/bin/env bash
#SBATCH --job-name={{jobName}}
#SBATCH --time={{time}}
#SBATCH --mem={{mem}}
#SBATCH --array=1-{{numRuns}}
#SBATCH --output={{jobName}}.out

EB_BUILD_DIR={{buildDir}}
EB_EXEC=$EB_BUILD_DIR/evobee

$EB_EXEC -c {{jobName}}.cfg.json
";

#[derive(Debug, Clone)]
pub struct SlurmSpec {
    pub basename: String,
    pub num_runs: u32,
    pub time: String,
    pub mem_mb: u32,
    pub build_dir: String,
}

impl SlurmSpec {
    pub fn new(basename: impl Into<String>, num_runs: u32) -> Self {
        Self {
            basename: basename.into(),
            num_runs,
            time: DEFAULT_TIME.to_string(),
            mem_mb: DEFAULT_MEM_MB,
            build_dir: DEFAULT_BUILD_DIR.to_string(),
        }
    }

    fn validate(&self) -> Result<()> {
        validation::require_non_empty(&self.basename, "basename", "Basename cannot be empty")?;
        if self.num_runs == 0 {
            return Err(Error::validation_invalid_argument(
                "numruns",
                "Number of runs must be at least 1",
                Some(self.num_runs.to_string()),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlurmFileResult {
    pub output_path: String,
    pub job_name: String,
    pub num_runs: u32,
}

/// Render the batch script text for a spec.
pub fn render(spec: &SlurmSpec) -> String {
    let mem = spec.mem_mb.to_string();
    let runs = spec.num_runs.to_string();
    template::render(
        SLURM_TEMPLATE,
        &[
            (TemplateVars::JOB_NAME, spec.basename.as_str()),
            (TemplateVars::TIME, spec.time.as_str()),
            (TemplateVars::MEM, mem.as_str()),
            (TemplateVars::NUM_RUNS, runs.as_str()),
            (TemplateVars::BUILD_DIR, spec.build_dir.as_str()),
        ],
    )
}

/// Write `slurm-<basename>` into `dir`, refusing to overwrite.
pub fn run(dir: &Path, spec: &SlurmSpec) -> Result<SlurmFileResult> {
    spec.validate()?;

    let output_path = dir.join(format!("slurm-{}", spec.basename));
    io::write_new(&output_path, &render(spec), "write slurm file")?;

    log_status!("slurm-file", "Wrote {}", output_path.display());

    Ok(SlurmFileResult {
        output_path: output_path.display().to_string(),
        job_name: spec.basename.clone(),
        num_runs: spec.num_runs,
    })
}
