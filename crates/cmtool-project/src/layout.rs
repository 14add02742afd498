use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use cmtool_constants::{
    C_CMAKE_TEMPLATE, C_MAIN_TEMPLATE, CPP_CMAKE_TEMPLATE, CPP_MAIN_TEMPLATE, ENV_TOOL_DIR,
    ENV_TOOL_PATH, REGISTRY_FILE_NAME, SHARE_DIR, TEMPLATE_DIR,
};
use cmtool_error::{Result, ToolError};

use crate::package_kind::PackageKind;
use crate::scaffold::TemplateSet;

/// An installation root holding `share/cmake_tool/` with the templates and
/// the package registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    /// Accepts `root` only when all four templates are present.
    #[must_use]
    pub fn from_root(root: &Path) -> Option<Self> {
        if root.as_os_str().is_empty() || !root.join(SHARE_DIR).exists() {
            return None;
        }

        let layout = Self {
            root: root.to_path_buf(),
        };
        let complete = [PackageKind::Cpp, PackageKind::C]
            .into_iter()
            .map(|kind| layout.templates(kind))
            .all(|set| set.cmake.is_file() && set.main.is_file());

        cmtool_logger::debug(
            &format!(
                "Template check at {}: {}",
                root.display(),
                if complete { "found" } else { "missing" }
            ),
            false,
        );

        complete.then_some(layout)
    }

    /// Search the usual install roots in order and take the first complete one.
    pub fn discover() -> Result<Self> {
        let layout = Self::candidate_roots()
            .iter()
            .find_map(|root| Self::from_root(root))
            .ok_or_else(|| {
                ToolError::RegistryUnavailable(
                    "could not find location of template files for cmake_tool".to_string(),
                )
            })?;

        layout.touch_registry()?;
        Ok(layout)
    }

    fn candidate_roots() -> Vec<PathBuf> {
        let mut roots = Vec::new();

        for var in [ENV_TOOL_DIR, ENV_TOOL_PATH] {
            if let Some(value) = env::var_os(var).filter(|v| !v.is_empty()) {
                roots.push(PathBuf::from(value));
            }
        }

        if let Some(exe_dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            let parent = exe_dir.join("..");
            roots.push(exe_dir);
            roots.push(parent);
        }

        if let Some(home) = dirs::home_dir() {
            let app_dir = home.join(".local");
            roots.push(home);
            roots.push(app_dir);
        }

        if cfg!(target_os = "linux") {
            roots.push(PathBuf::from("/usr/local"));
            roots.push(PathBuf::from("/usr"));
        }

        roots
    }

    fn touch_registry(&self) -> Result<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.registry_path())
            .map(|_| ())
            .map_err(|e| {
                ToolError::RegistryUnavailable(format!(
                    "{}: {e}",
                    self.registry_path().display()
                ))
            })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn template_dir(&self) -> PathBuf {
        self.root.join(TEMPLATE_DIR)
    }

    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.template_dir().join(REGISTRY_FILE_NAME)
    }

    #[must_use]
    pub fn templates(&self, kind: PackageKind) -> TemplateSet {
        let dir = self.template_dir();
        match kind {
            PackageKind::Cpp => TemplateSet {
                cmake: dir.join(CPP_CMAKE_TEMPLATE),
                main: dir.join(CPP_MAIN_TEMPLATE),
            },
            PackageKind::C => TemplateSet {
                cmake: dir.join(C_CMAKE_TEMPLATE),
                main: dir.join(C_MAIN_TEMPLATE),
            },
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;

    pub(crate) fn fake_install(root: &Path) {
        let dir = root.join(TEMPLATE_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(CPP_CMAKE_TEMPLATE),
            "project(%%PROJECT_NAME%% CXX)\nadd_executable(%%PROJECT_NAME%% src/%%PROJECT_NAME%%.cpp)\n",
        )
        .unwrap();
        fs::write(dir.join(CPP_MAIN_TEMPLATE), "int main() { return 0; }\n").unwrap();
        fs::write(dir.join(C_CMAKE_TEMPLATE), "project(%%PROJECT_NAME%% C)\n").unwrap();
        fs::write(dir.join(C_MAIN_TEMPLATE), "int main(void) { return 0; }\n").unwrap();
    }

    #[test]
    fn test_complete_root_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        fake_install(dir.path());

        let layout = InstallLayout::from_root(dir.path()).unwrap();
        assert_eq!(
            layout.registry_path(),
            dir.path().join("share/cmake_tool/create.info")
        );
        assert_eq!(
            layout.templates(PackageKind::C).main,
            dir.path().join("share/cmake_tool/c_main.c.in")
        );
    }

    #[test]
    fn test_incomplete_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fake_install(dir.path());
        fs::remove_file(dir.path().join(TEMPLATE_DIR).join(C_MAIN_TEMPLATE)).unwrap();

        assert!(InstallLayout::from_root(dir.path()).is_none());
        assert!(InstallLayout::from_root(Path::new("")).is_none());
    }

    #[test]
    fn test_touch_registry_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        fake_install(dir.path());
        let layout = InstallLayout::from_root(dir.path()).unwrap();

        layout.touch_registry().unwrap();
        assert_eq!(fs::read_to_string(layout.registry_path()).unwrap(), "");
    }
}
