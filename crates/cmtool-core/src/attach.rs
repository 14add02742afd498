use std::fs;
use std::path::Path;

use cmtool_error::{Result, ToolError};
use cmtool_utils::absolute_path;

use crate::context::Context;
use crate::report::report_error;

pub struct AttachManager<'c, 'a> {
    ctx: &'c Context<'a>,
    quiet: bool,
}

impl<'c, 'a> AttachManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx, quiet: false }
    }

    /// Suppress success lines, for attaches made on behalf of another command.
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Register an existing path. Returns `false` when it was already there.
    pub fn attach(&self, token: &str) -> Result<bool> {
        if token.trim().is_empty() {
            return Err(ToolError::InvalidOperation(
                "No name was specified for this project!".to_string(),
            ));
        }

        let full = absolute_path(token, self.ctx.store.home());
        if !Path::new(&full).exists() {
            return Err(ToolError::PackageNotFound(full));
        }

        let added = self.ctx.store.append(&full)?;
        if !self.quiet {
            if added {
                self.ctx.success(&format!("Attached \"{full}\" to cmake_tool"));
            } else {
                self.ctx
                    .success(&format!("\"{full}\" is already attached to cmake_tool"));
            }
        }
        Ok(added)
    }

    /// Attach every path listed in `file`, one per line. Failures are
    /// reported and the rest of the file is still processed.
    pub fn attach_from_file(&self, file: &str) -> Result<usize> {
        let path = absolute_path(file, self.ctx.store.home());
        let content = fs::read_to_string(&path)
            .map_err(|e| ToolError::FilesystemAccessDenied(path.clone(), e.to_string()))?;

        let mut added = 0;
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match self.attach(line) {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(err) => report_error("attach", &err),
            }
        }
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Options;
    use crate::list::{ListFormat, ListManager};
    use crate::testing::Fixture;

    #[test]
    fn test_attach_is_idempotent() {
        let fx = Fixture::new();
        let demo = fx.package("demo");
        let ctx = fx.context(Options::default());
        let manager = AttachManager::new(&ctx);

        assert!(manager.attach(&demo).unwrap());
        assert!(!manager.attach(&demo).unwrap());
        assert!(!manager.attach(&format!("{demo}/")).unwrap());
        assert_eq!(fx.store.load().unwrap(), vec![demo]);
    }

    #[test]
    fn test_attach_then_list() {
        let fx = Fixture::new();
        let demo = fx.package("demo");
        let ctx = fx.context(Options::default());

        AttachManager::new(&ctx).attach(&demo).unwrap();
        assert_eq!(fx.store.load().unwrap(), vec![demo.clone()]);

        let lists = ListManager::new(&ctx);
        assert_eq!(lists.list(ListFormat::Path).unwrap(), format!("{demo}\n"));
        assert_eq!(lists.list(ListFormat::Basename).unwrap(), "demo\n");
    }

    #[test]
    fn test_attach_missing_path_changes_nothing() {
        let fx = Fixture::new();
        let gone = fx.missing("gone");
        let ctx = fx.context(Options::default());

        let result = AttachManager::new(&ctx).attach(&gone);
        assert!(matches!(result, Err(ToolError::PackageNotFound(p)) if p == gone));
        assert!(fx.store.load().unwrap().is_empty());
    }

    #[test]
    fn test_attach_matches_home_shorthand_entry() {
        let fx = Fixture::new();
        let real = fx.package("home/work/foo");
        fx.register(&["~/work/foo"]);
        let ctx = fx.context(Options::default());

        assert!(!AttachManager::new(&ctx).attach(&real).unwrap());
        assert_eq!(fx.store.load().unwrap(), vec![real]);
    }

    #[test]
    fn test_attach_from_file_skips_bad_lines() {
        let fx = Fixture::new();
        let a = fx.package("a");
        let b = fx.package("b");
        let gone = fx.missing("gone");
        let list = fx.root().join("paths.txt");
        fs::write(&list, format!("{a}\n\n  {gone}\n{b}\n{a}\n")).unwrap();
        let ctx = fx.context(Options::default());

        let added = AttachManager::new(&ctx)
            .attach_from_file(&list.to_string_lossy())
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(fx.store.load().unwrap(), vec![a, b]);
    }
}
