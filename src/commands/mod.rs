pub type CmdResult<T> = evobee_tools::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod config_gen;
pub mod new_class;
pub mod plot;
pub mod slurm_file;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (evobee_tools::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::ConfigGen(args) => dispatch!(args, global, config_gen),
        crate::Commands::SlurmFile(args) => dispatch!(args, global, slurm_file),
        crate::Commands::NewClass(args) => dispatch!(args, global, new_class),
        crate::Commands::Plot(args) => dispatch!(args, global, plot),
    }
}
