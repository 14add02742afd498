use anyhow::Result;
use cmtool_core::{AttachManager, Context};

use super::{print_header, settle};

pub struct AttachHandler;

impl AttachHandler {
    pub fn handle_attach(
        ctx: &Context<'_>,
        packages: &[String],
        read_file: Option<&str>,
    ) -> Result<()> {
        let manager = AttachManager::new(ctx);

        if let Some(file) = read_file {
            print_header("attach", &format!("--read-file {file}"));
            if let Some(added) = settle("attach", manager.attach_from_file(file))? {
                cmtool_logger::finish(&format!("Attached {added} new packages from {file}"));
            }
        }

        for package in packages {
            print_header("attach", package);
            settle("attach", manager.attach(package))?;
        }
        Ok(())
    }
}
