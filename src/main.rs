use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config_gen, new_class, plot, slurm_file, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "evobee-tools")]
#[command(version = VERSION)]
#[command(about = "Command-line utilities for preparing and analysing evobee simulation runs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a config file from a template plus parameter overrides
    ConfigGen(config_gen::ConfigGenArgs),
    /// Generate a SLURM batch file for an array of runs
    SlurmFile(slurm_file::SlurmFileArgs),
    /// Generate .cpp and .h skeletons for a new simulator class
    NewClass(new_class::NewClassArgs),
    /// Render charts from simulation output logs
    #[command(subcommand)]
    Plot(plot::PlotCommand),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {};
    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    match json_result {
        Ok(value) => output::print_success(value),
        Err(err) => output::print_error(&err),
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
