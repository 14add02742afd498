use cmtool_error::{Result, ToolError};
use cmtool_project::PackageHandle;

use crate::bulk;
use crate::context::Context;
use crate::dispatch::Dispatch;
use crate::report::report_error;

pub struct BuildManager<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> BuildManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    pub fn build(&self, token: &str) -> Result<()> {
        Dispatch::new(self.ctx, "build").run(token, |path| self.build_one(path))
    }

    /// Returns how many packages built successfully.
    pub fn build_all(&self) -> Result<usize> {
        self.ctx.traced("build", "--all", || self.build_batch())
    }

    fn build_batch(&self) -> Result<usize> {
        let packages = bulk::registered_packages(self.ctx)?;
        if !bulk::confirm_batch(self.ctx, &packages, "Build and install above packages?") {
            return Ok(0);
        }

        let mut built = 0;
        for path in &packages {
            match self.build_one(path) {
                Ok(()) => built += 1,
                Err(err) => report_error("build", &err),
            }
        }

        cmtool_logger::finish(&format!("Built {built} of {} packages", packages.len()));
        Ok(built)
    }

    fn build_one(&self, path: &str) -> Result<()> {
        let package = PackageHandle::open(path);
        if !package.exists() {
            return Err(ToolError::PackageNotFound(path.to_string()));
        }

        self.ctx.info(&format!(">> build start: \"{package}\""));
        self.ctx.actions.build_at(&package.path)?;
        self.ctx
            .success(&format!("<< build success: \"{}\"", package.path.display()));
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
    fn test_build_by_name() {
        let fx = Fixture::new();
        let demo = fx.package("work/demo");
        fx.register(&[&demo]);
        let ctx = fx.context(Options::default());

        BuildManager::new(&ctx).build("demo").unwrap();
        assert_eq!(fx.actions.targets("build"), vec![PathBuf::from(&demo)]);
    }

    #[test]
    fn test_build_missing_target_is_not_found_and_kept() {
        let fx = Fixture::new();
        let gone = fx.missing("work/gone");
        fx.register(&[&gone]);
        let ctx = fx.context(Options::default());

        let result = BuildManager::new(&ctx).build(&gone);
        assert!(matches!(result, Err(ToolError::PackageNotFound(_))));
        assert!(fx.actions.names().is_empty());
        assert_eq!(fx.store.load().unwrap(), vec![gone]);
    }

    #[test]
    fn test_build_ambiguous_touches_nothing() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let b = fx.package("b/foo");
        fx.register(&[&a, &b]);
        let ctx = fx.context(Options::default());

        let result = BuildManager::new(&ctx).build("foo");
        assert!(matches!(result, Err(ToolError::AmbiguousMatch(_, _))));
        assert!(fx.actions.names().is_empty());
    }

    #[test]
    fn test_build_forced_builds_every_match() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let b = fx.package("b/foo");
        fx.register(&[&a, &b]);
        let ctx = fx.context(Options {
            force: true,
            ..Options::default()
        });

        BuildManager::new(&ctx).build("foo").unwrap();
        assert_eq!(
            fx.actions.targets("build"),
            vec![PathBuf::from(&a), PathBuf::from(&b)]
        );
    }

    #[test]
    fn test_build_failure_keeps_registry() {
        let fx = Fixture::new();
        let demo = fx.package("demo");
        fx.register(&[&demo]);
        *fx.actions.fail.borrow_mut() = Some("build");
        let ctx = fx.context(Options::default());

        let result = BuildManager::new(&ctx).build(&demo);
        assert!(matches!(result, Err(ToolError::ExternalActionFailed(_, Some(2)))));
        assert_eq!(fx.store.load().unwrap(), vec![demo]);
    }

    #[test]
    fn test_build_all_prunes_and_confirms_once() {
        let fx = Fixture::new();
        let a = fx.package("a");
        let b = fx.package("b");
        let gone = fx.missing("gone");
        fx.register(&[&a, &gone, &b]);
        fx.answer(&[true]);
        let ctx = fx.context(Options::default());

        let built = BuildManager::new(&ctx).build_all().unwrap();
        assert_eq!(built, 2);
        assert_eq!(fx.asked(), 1);
        assert_eq!(fx.store.load().unwrap(), vec![a, b]);
    }

    #[test]
    fn test_build_all_declined() {
        let fx = Fixture::new();
        let a = fx.package("a");
        fx.register(&[&a]);
        fx.answer(&[false]);
        let ctx = fx.context(Options::default());

        assert_eq!(BuildManager::new(&ctx).build_all().unwrap(), 0);
        assert!(fx.actions.names().is_empty());
    }

    #[test]
    fn test_build_all_empty_registry_does_not_ask() {
        let fx = Fixture::new();
        let ctx = fx.context(Options::default());

        assert_eq!(BuildManager::new(&ctx).build_all().unwrap(), 0);
        assert_eq!(fx.asked(), 0);
    }
}
