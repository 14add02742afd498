use anyhow::Result;
use cmtool_core::{Context, DeleteManager};

use super::{print_header, settle};

pub struct DeleteHandler;

impl DeleteHandler {
    pub fn handle_delete(ctx: &Context<'_>, packages: &[String], all: bool) -> Result<()> {
        let manager = DeleteManager::new(ctx);

        if all {
            print_header("delete", "--all");
            if let Some(deleted) = settle("delete", manager.delete_all())? {
                cmtool_logger::finish(&format!("Deleted {deleted} packages"));
            }
            return Ok(());
        }

        for package in packages {
            print_header("delete", package);
            settle("delete", manager.delete(package))?;
        }
        Ok(())
    }
}
