use anyhow::Result;
use cmtool_core::{ArchiveManager, Context};

use super::{print_header, settle};

pub struct ArchiveHandler;

impl ArchiveHandler {
    pub fn handle_tar(ctx: &Context<'_>, packages: &[String], output: &str, all: bool) -> Result<()> {
        let manager = ArchiveManager::new(ctx);

        if all {
            print_header("tar", "--all");
            settle("tar", manager.tar_all(output))?;
        } else {
            print_header("tar", &packages.join(" "));
            settle("tar", manager.tar(packages, output))?;
        }
        Ok(())
    }

    pub fn handle_untar(ctx: &Context<'_>, archives: &[String], output: &str) -> Result<()> {
        let manager = ArchiveManager::new(ctx);

        for archive in archives {
            print_header("untar", archive);
            settle("untar", manager.untar(archive, output))?;
        }
        Ok(())
    }
}
