use cmtool_error::{Result, ToolError};
use cmtool_project::PackageHandle;

use crate::bulk;
use crate::context::Context;
use crate::dispatch::Dispatch;
use crate::report::report_error;

pub struct CleanManager<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> CleanManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    pub fn clean(&self, token: &str) -> Result<()> {
        Dispatch::new(self.ctx, "clean").run(token, |path| self.clean_one(path))
    }

    pub fn clean_all(&self) -> Result<usize> {
        self.ctx.traced("clean", "--all", || self.clean_batch())
    }

    fn clean_batch(&self) -> Result<usize> {
        let packages = bulk::registered_packages(self.ctx)?;
        if !bulk::confirm_batch(
            self.ctx,
            &packages,
            "Clean install files for above packages?",
        ) {
            return Ok(0);
        }

        let mut cleaned = 0;
        for path in &packages {
            match self.clean_one(path) {
                Ok(()) => cleaned += 1,
                Err(err) => report_error("clean", &err),
            }
        }
        Ok(cleaned)
    }

    fn clean_one(&self, path: &str) -> Result<()> {
        let package = PackageHandle::open(path);
        if !package.exists() {
            return Err(ToolError::PackageNotFound(path.to_string()));
        }

        let build_dir = package.build_dir();
        self.ctx
            .info(&format!(">> clean start: \"{}\"", build_dir.display()));
        self.ctx.actions.clean_at(&package.path)?;
        self.ctx
            .success(&format!("<< clean success: \"{}\"", build_dir.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Options;
    use crate::testing::Fixture;
    use std::path::PathBuf;

    #[test]
    fn test_clean_full_path() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let b = fx.package("b/foo");
        fx.register(&[&a, &b]);
        let ctx = fx.context(Options::default());

        CleanManager::new(&ctx).clean(&b).unwrap();
        assert_eq!(fx.actions.targets("clean"), vec![PathBuf::from(&b)]);
    }

    #[test]
    fn test_clean_unknown() {
        let fx = Fixture::new();
        let ctx = fx.context(Options::default());
        assert!(matches!(
            CleanManager::new(&ctx).clean("nothing"),
            Err(ToolError::PackageNotFound(_))
        ));
    }

    #[test]
    fn test_clean_all_continues_after_failure() {
        let fx = Fixture::new();
        let a = fx.package("a");
        let b = fx.package("b");
        fx.register(&[&a, &b]);
        fx.answer(&[true]);
        *fx.actions.fail.borrow_mut() = Some("clean");
        let ctx = fx.context(Options::default());

        assert_eq!(CleanManager::new(&ctx).clean_all().unwrap(), 0);
        assert_eq!(fx.actions.targets("clean").len(), 2);
    }
}
