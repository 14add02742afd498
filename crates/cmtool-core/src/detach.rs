use std::path::Path;

use cmtool_error::Result;

use crate::bulk;
use crate::context::Context;
use crate::dispatch::Dispatch;

pub struct DetachManager<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> DetachManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    /// Forget a package without touching its files. Only a target that still
    /// exists on disk needs confirmation.
    pub fn detach(&self, token: &str) -> Result<()> {
        Dispatch::new(self.ctx, "detach").run(token, |path| {
            if Path::new(path).exists() {
                println!("    {path}");
                if !self
                    .ctx
                    .prompt
                    .confirm("Are you sure detach the package from cmake_tool?")
                {
                    self.ctx.info(&format!("Skipped detaching \"{path}\""));
                    return Ok(());
                }
            }

            self.ctx.store.remove(path)?;
            self.ctx
                .success(&format!("Detached \"{path}\" from cmake_tool"));
            Ok(())
        })
    }

    /// Move the whole registry aside after one confirmation.
    pub fn detach_all(&self) -> Result<bool> {
        self.ctx.traced("detach", "--all", || self.detach_batch())
    }

    fn detach_batch(&self) -> Result<bool> {
        let packages = bulk::registered_packages(self.ctx)?;
        if !bulk::confirm_batch(self.ctx, &packages, "Detach above packages from cmake_tool?") {
            return Ok(false);
        }

        let backup = self.ctx.store.backup()?;
        self.ctx.success(&format!(
            "Detached {} packages, previous registry kept at \"{}\"",
            packages.len(),
            backup.display()
        ));
        Ok(true)
    }
}
