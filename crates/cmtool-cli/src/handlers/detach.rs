use anyhow::Result;
use cmtool_core::{Context, DetachManager};

use super::{print_header, settle};

pub struct DetachHandler;

impl DetachHandler {
    pub fn handle_detach(ctx: &Context<'_>, packages: &[String], all: bool) -> Result<()> {
        let manager = DetachManager::new(ctx);

        if all {
            print_header("detach", "--all");
            settle("detach", manager.detach_all())?;
            return Ok(());
        }

        for package in packages {
            print_header("detach", package);
            settle("detach", manager.detach(package))?;
        }
        Ok(())
    }
}
