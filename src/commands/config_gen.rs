use clap::Args;
use evobee_tools::overrides::{self, ConfigGenResult};
use std::path::PathBuf;

use super::CmdResult;

#[derive(Args)]
pub struct ConfigGenArgs {
    /// Template config file to amend
    pub templatefile: PathBuf,

    /// Output config file to create (must not exist)
    pub outputfile: PathBuf,

    /// Parameter overrides: param=val, or sct:param=val to restrict the
    /// substitution to a named section of the template
    #[arg(required = true, value_name = "PARAM=VAL")]
    pub params: Vec<String>,
}

pub fn run(args: ConfigGenArgs, _global: &super::GlobalArgs) -> CmdResult<ConfigGenResult> {
    let result = overrides::run(&args.templatefile, &args.outputfile, &args.params)?;
    Ok((result, 0))
}
