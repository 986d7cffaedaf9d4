use clap::Args;
use evobee_tools::slurm::{self, SlurmFileResult, SlurmSpec};
use std::path::Path;

use super::CmdResult;

#[derive(Args)]
pub struct SlurmFileArgs {
    /// Run basename; the batch file is written as slurm-<basename>
    pub basename: String,

    /// Number of array runs (--array=1-<numruns>)
    pub numruns: u32,

    /// Wall-time limit for each run
    #[arg(long, default_value = slurm::DEFAULT_TIME)]
    pub time: String,

    /// Memory per run, in megabytes
    #[arg(long, default_value_t = slurm::DEFAULT_MEM_MB)]
    pub mem: u32,

    /// Directory containing the simulator build
    #[arg(long, default_value = slurm::DEFAULT_BUILD_DIR)]
    pub build_dir: String,
}

pub fn run(args: SlurmFileArgs, _global: &super::GlobalArgs) -> CmdResult<SlurmFileResult> {
    let spec = SlurmSpec {
        basename: args.basename,
        num_runs: args.numruns,
        time: args.time,
        mem_mb: args.mem,
        build_dir: args.build_dir,
    };

    let result = slurm::run(Path::new("."), &spec)?;
    Ok((result, 0))
}
