use std::fs;
use std::path::Path;

use cmtool_error::{Result, ToolError};
use cmtool_project::PackageHandle;

use crate::bulk;
use crate::context::Context;
use crate::dispatch::Dispatch;
use crate::report::report_error;

pub struct DeleteManager<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> DeleteManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    /// Delete one package after asking. A declined prompt changes nothing.
    pub fn delete(&self, token: &str) -> Result<()> {
        Dispatch::new(self.ctx, "delete").run(token, |path| {
            println!("    {path}");
            if !self
                .ctx
                .prompt
                .confirm("Delete the above packages and clean install files?")
            {
                self.ctx.info(&format!("Skipped deleting \"{path}\""));
                return Ok(());
            }

            self.remove_package(path)?;
            self.ctx.store.remove(path)?;
            Ok(())
        })
    }

    /// Delete every registered package after one confirmation. Entries whose
    /// removal failed stay registered.
    pub fn delete_all(&self) -> Result<usize> {
        self.ctx.traced("delete", "--all", || self.delete_batch())
    }

    fn delete_batch(&self) -> Result<usize> {
        let packages = bulk::registered_packages(self.ctx)?;
        if !bulk::confirm_batch(
            self.ctx,
            &packages,
            "Delete all files for above packages (including src and install files)?",
        ) {
            return Ok(0);
        }

        let mut failed = Vec::new();
        for path in &packages {
            if let Err(err) = self.remove_package(path) {
                report_error("delete", &err);
                failed.push(path.clone());
            }
        }

        self.ctx.store.rewrite(&failed)?;
        Ok(packages.len() - failed.len())
    }

    /// Clean installed files, then remove the tree. An already absent
    /// directory counts as removed.
    fn remove_package(&self, path: &str) -> Result<()> {
        let package = PackageHandle::open(path);
        if !package.exists() {
            self.ctx
                .debug(&format!("\"{path}\" is already gone from disk"));
            return Ok(());
        }

        self.ctx.actions.clean_at(&package.path)?;

        let size = fs_extra::dir::get_size(&package.path).unwrap_or(0);
        fs::remove_dir_all(&package.path).map_err(|e| {
            ToolError::FilesystemAccessDenied(path.to_string(), e.to_string())
        })?;

        self.ctx.success(&format!(
            "Deleted \"{}\" ({:.2} MB)",
            Path::new(path).display(),
            megabytes(size)
        ));
        Ok(())
    }
}

/// Whole kilobytes are exact in an `f64`, so only sub-kilobyte precision is
/// dropped.
fn megabytes(bytes: u64) -> f64 {
    let kib = u32::try_from(bytes / 1024).unwrap_or(u32::MAX);
    f64::from(kib) / 1024.0
}
