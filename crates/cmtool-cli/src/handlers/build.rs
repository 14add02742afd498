use anyhow::Result;
use cmtool_core::{BuildManager, Context};

use super::{print_header, settle};

pub struct BuildHandler;

impl BuildHandler {
    pub fn handle_build(ctx: &Context<'_>, packages: &[String], all: bool) -> Result<()> {
        let manager = BuildManager::new(ctx);

        if all {
            print_header("build", "--all");
            settle("build", manager.build_all())?;
            return Ok(());
        }

        for package in packages {
            print_header("build", package);
            settle("build", manager.build(package))?;
        }
        Ok(())
    }
}
