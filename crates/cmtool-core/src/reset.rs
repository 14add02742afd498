use cmtool_error::Result;

use crate::context::Context;

pub struct ResetManager<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> ResetManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    /// Drop registry entries whose directory no longer exists.
    pub fn reset(&self) -> Result<Vec<String>> {
        let dropped = self.ctx.store.prune()?;
        for path in &dropped {
            self.ctx.info(&format!("Removed missing package \"{path}\""));
        }
        self.ctx.success(&format!(
            "Registry reset, {} stale entries removed",
            dropped.len()
        ));
        Ok(dropped)
    }
}
