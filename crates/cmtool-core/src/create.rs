use std::fs;
use std::path::{Path, PathBuf};

use cmtool_error::{Result, ToolError};
use cmtool_project::{InstallLayout, PackageKind, scaffold_package};
use cmtool_utils::absolute_path;

use crate::context::Context;

pub struct CreateManager<'c, 'a> {
    ctx: &'c Context<'a>,
    layout: &'c InstallLayout,
}

impl<'c, 'a> CreateManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>, layout: &'c InstallLayout) -> Self {
        Self { ctx, layout }
    }

    /// Create a new package from the templates of `kind` and register it.
    /// An existing directory is registered but left untouched.
    pub fn create(&self, token: &str, kind: PackageKind) -> Result<PathBuf> {
        if token.trim().is_empty() {
            return Err(ToolError::InvalidOperation(
                "No name was specified for this project!".to_string(),
            ));
        }

        let full = absolute_path(token, self.ctx.store.home());
        let dir = PathBuf::from(&full);

        if dir.exists() {
            cmtool_logger::warn(&format!("\"{full}\" already exists, skipping templates"));
            self.ctx.store.append(&full)?;
            return Ok(dir);
        }

        fs::create_dir_all(&dir)
            .map_err(|e| ToolError::FilesystemAccessDenied(full.clone(), e.to_string()))?;
        self.ctx.store.append(&full)?;

        let created = scaffold_package(&dir, kind, &self.layout.templates(kind))?;
        self.ctx.debug(&format!(
            "Scaffolded {} paths under {}",
            created.len(),
            Path::new(&full).display()
        ));

        self.ctx
            .success(&format!("Created {kind} package \"{full}\""));
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Options;
    use crate::testing::Fixture;

    #[test]
    fn test_create_cpp_package() {
        let fx = Fixture::new();
        let layout = fx.install_templates();
        let ctx = fx.context(Options::default());
        let target = fx.missing("work/hello");

        let dir = CreateManager::new(&ctx, &layout)
            .create(&target, PackageKind::Cpp)
            .unwrap();
        assert!(dir.join("include").is_dir());
        assert_eq!(
            fs::read_to_string(dir.join("CMakeLists.txt")).unwrap(),
            "project(hello CXX)\n"
        );
        assert!(dir.join("src").join("hello.cpp").is_file());
        assert_eq!(fx.store.load().unwrap(), vec![target]);
    }

    #[test]
    fn test_create_c_package() {
        let fx = Fixture::new();
        let layout = fx.install_templates();
        let ctx = fx.context(Options::default());

        let dir = CreateManager::new(&ctx, &layout)
            .create(&fx.missing("tool"), PackageKind::C)
            .unwrap();
        assert!(dir.join("src").join("tool.c").is_file());
    }

    #[test]
    fn test_create_existing_dir_only_registers() {
        let fx = Fixture::new();
        let layout = fx.install_templates();
        let existing = fx.package("existing");
        let ctx = fx.context(Options::default());

        CreateManager::new(&ctx, &layout)
            .create(&existing, PackageKind::Cpp)
            .unwrap();
        assert!(!Path::new(&existing).join("CMakeLists.txt").exists());
        assert_eq!(fx.store.load().unwrap(), vec![existing]);
    }

    #[test]
    fn test_create_with_empty_template_fails() {
        let fx = Fixture::new();
        let layout = fx.install_templates();
        fs::write(layout.templates(PackageKind::C).main, "").unwrap();
        let ctx = fx.context(Options::default());

        let result = CreateManager::new(&ctx, &layout).create(&fx.missing("bad"), PackageKind::C);
        assert!(matches!(result, Err(ToolError::TemplateError(_))));
    }
}
