use anyhow::Result;
use cmtool_core::{CleanManager, Context};

use super::{print_header, settle};

pub struct CleanHandler;

impl CleanHandler {
    pub fn handle_clean(ctx: &Context<'_>, packages: &[String], all: bool) -> Result<()> {
        let manager = CleanManager::new(ctx);

        if all {
            print_header("clean", "--all");
            if let Some(cleaned) = settle("clean", manager.clean_all())? {
                cmtool_logger::finish(&format!("Cleaned {cleaned} packages"));
            }
            return Ok(());
        }

        for package in packages {
            print_header("clean", package);
            settle("clean", manager.clean(package))?;
        }
        Ok(())
    }
}
