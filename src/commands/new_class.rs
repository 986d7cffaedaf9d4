use clap::Args;
use evobee_tools::skeleton::{self, ClassSkeletonResult};
use std::path::Path;

use super::CmdResult;

#[derive(Args)]
pub struct NewClassArgs {
    /// Name of the new C++ class
    pub classname: String,
}

pub fn run(args: NewClassArgs, _global: &super::GlobalArgs) -> CmdResult<ClassSkeletonResult> {
    let result = skeleton::run(Path::new("."), &args.classname)?;
    Ok((result, 0))
}
