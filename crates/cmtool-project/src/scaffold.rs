use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cmtool_constants::PROJECT_NAME_PLACEHOLDER;
use cmtool_error::{Result, ToolError};
use cmtool_utils::{basename, ensure_dir_exists};

use crate::package_kind::PackageKind;

/// Template files used to generate one kind of package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    pub cmake: PathBuf,
    pub main: PathBuf,
}

impl TemplateSet {
    fn read(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))
            .map_err(|e| ToolError::TemplateError(format!("{e:#}")))?;

        if content.is_empty() {
            return Err(ToolError::TemplateError(format!(
                "Failed to get any contents from file at \"{}\"",
                path.display()
            )));
        }
        Ok(content)
    }
}

/// Populate an existing package directory:
/// `CMakeLists.txt`, `include/`, `src/` and `src/<name>.<ext>`.
/// Returns the paths that were created.
pub fn scaffold_package(
    package_dir: &Path,
    kind: PackageKind,
    templates: &TemplateSet,
) -> Result<Vec<PathBuf>> {
    let cmake_contents = TemplateSet::read(&templates.cmake)?;
    let main_contents = TemplateSet::read(&templates.main)?;

    let name = basename(&package_dir.to_string_lossy()).to_string();
    let cmake_contents = cmake_contents.replace(PROJECT_NAME_PLACEHOLDER, &name);

    let include_dir = package_dir.join("include");
    let src_dir = package_dir.join("src");
    let cmake_path = package_dir.join("CMakeLists.txt");
    let main_path = src_dir.join(format!("{name}.{}", kind.main_extension()));

    let denied = |path: &Path, e: std::io::Error| {
        ToolError::FilesystemAccessDenied(path.display().to_string(), e.to_string())
    };

    ensure_dir_exists(&include_dir).map_err(|e| denied(&include_dir, e))?;
    ensure_dir_exists(&src_dir).map_err(|e| denied(&src_dir, e))?;
    fs::write(&cmake_path, cmake_contents).map_err(|e| denied(&cmake_path, e))?;
    fs::write(&main_path, main_contents).map_err(|e| denied(&main_path, e))?;

    let created = vec![include_dir, src_dir, cmake_path, main_path];
    for path in &created {
        cmtool_logger::debug(&format!("Creating path at \"{}\"", path.display()), false);
    }
    Ok(created)
}
