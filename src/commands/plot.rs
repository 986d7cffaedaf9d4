use clap::{Args, Subcommand};
use evobee_tools::plot::{histogram, results, species, swarm, temp_response, violin, PlotResult};
use std::path::{Path, PathBuf};

use super::CmdResult;

#[derive(Subcommand)]
pub enum PlotCommand {
    /// Histogram of fixation times across runs
    Histogram(HistogramArgs),
    /// Violin plot of fixation times across runs
    Violin(ViolinArgs),
    /// Swarm plot of flower marker-point counts across runs
    Swarm(SwarmArgs),
    /// Two plant species over time, from a single run's logs
    Species(SpeciesArgs),
    /// Pollination-time results across patchiness levels, with error bars
    Results(ResultsArgs),
    /// Synthetic ambient/flower temperature response exploration
    TempResponse,
}

#[derive(Args)]
pub struct HistogramArgs {
    /// Fixation times, one per line (NOFIX lines are skipped)
    pub datafile: PathBuf,
    /// Lower bound of the x axis, generations
    pub xmin: i64,
    /// Upper bound of the x axis, generations
    pub xmax: i64,
    /// Upper bound of the y axis
    pub ymax: i64,
    /// Chart title
    pub title: String,
}

#[derive(Args)]
pub struct ViolinArgs {
    /// Fixation times, one per line (NOFIX lines are skipped)
    pub datafile: PathBuf,

    /// Upper bound of the y axis
    #[arg(long, default_value_t = violin::DEFAULT_YMAX)]
    pub ymax: f64,
}

#[derive(Args)]
pub struct SwarmArgs {
    /// Chart title, also used to name the output file
    pub title: String,

    /// Marker-point count files (CSV: marker_point,count); empty files
    /// are tolerated
    #[arg(required = true, value_name = "COUNTFILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Args)]
pub struct SpeciesArgs {
    /// Log file basename; <basename>-s1.dat and <basename>-s2.dat must exist
    pub logfilebasename: String,
    /// Upper bound of the x axis, generations
    pub xmax: f64,
    /// Upper bound of the y axis, plants
    pub ymax: f64,
    /// Chart title
    pub title: String,
}

#[derive(Args)]
pub struct ResultsArgs {
    /// Chart title, also used to name the output file
    pub title: String,

    /// Summary statistics files (CSV: C,P,N,min,Q1,median,Q3,max,mean,sd)
    #[arg(required = true, value_name = "STATSFILE")]
    pub files: Vec<PathBuf>,

    /// Fix the y axis to the patch-constancy window (140-550)
    #[arg(long)]
    pub patchconst: bool,
}

pub fn run(command: PlotCommand, _global: &super::GlobalArgs) -> CmdResult<PlotResult> {
    let dir = Path::new(".");

    let result = match command {
        PlotCommand::Histogram(args) => histogram::run(
            dir,
            &histogram::HistogramSpec {
                datafile: args.datafile,
                xmin: args.xmin,
                xmax: args.xmax,
                ymax: args.ymax,
                title: args.title,
            },
        )?,
        PlotCommand::Violin(args) => violin::run(
            dir,
            &violin::ViolinSpec {
                datafile: args.datafile,
                ymax: args.ymax,
            },
        )?,
        PlotCommand::Swarm(args) => swarm::run(
            dir,
            &swarm::SwarmSpec {
                title: args.title,
                files: args.files,
            },
        )?,
        PlotCommand::Species(args) => species::run(
            dir,
            &species::SpeciesSpec {
                log_basename: args.logfilebasename,
                xmax: args.xmax,
                ymax: args.ymax,
                title: args.title,
            },
        )?,
        PlotCommand::Results(args) => results::run(
            dir,
            &results::ResultsSpec {
                title: args.title,
                files: args.files,
                patch_constrained: args.patchconst,
            },
        )?,
        PlotCommand::TempResponse => temp_response::run(dir)?,
    };

    Ok((result, 0))
}
