use anyhow::Result;
use cmtool_core::{Context, RunManager};

use super::{print_header, settle};

pub struct RunHandler;

impl RunHandler {
    pub fn handle_run(ctx: &Context<'_>, package: &str, program: &str, args: &[String]) -> Result<()> {
        print_header("run", &format!("{package} {program}"));
        settle("run", RunManager::new(ctx).run(package, program, args))?;
        Ok(())
    }
}
