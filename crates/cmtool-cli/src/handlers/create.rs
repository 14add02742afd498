use anyhow::Result;
use cmtool_core::{Context, CreateManager};
use cmtool_project::{InstallLayout, PackageKind};

use super::{print_header, settle};

pub struct CreateHandler;

impl CreateHandler {
    pub fn handle_create(
        ctx: &Context<'_>,
        layout: &InstallLayout,
        packages: &[String],
        kind: &str,
    ) -> Result<()> {
        let Some(kind) = settle("create", kind.parse::<PackageKind>())? else {
            return Ok(());
        };

        let manager = CreateManager::new(ctx, layout);
        for package in packages {
            print_header("create", package);
            settle("create", manager.create(package, kind))?;
        }
        Ok(())
    }
}
