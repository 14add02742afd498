use anyhow::Result;
use cmtool_core::{Context, ResetManager};

use super::{print_header, settle};

pub struct ResetHandler;

impl ResetHandler {
    pub fn handle_reset(ctx: &Context<'_>) -> Result<()> {
        print_header("reset", "");
        settle("reset", ResetManager::new(ctx).reset())?;
        Ok(())
    }
}
