use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use cmtool_constants::{C_CMAKE_TEMPLATE, C_MAIN_TEMPLATE, CPP_CMAKE_TEMPLATE, CPP_MAIN_TEMPLATE};
use cmtool_error::{Result, ToolError};
use cmtool_project::InstallLayout;
use cmtool_registry::RegistryStore;
use cmtool_runtime::ExternalActions;
use tempfile::TempDir;

use crate::context::{Context, Options};
use crate::prompt::Confirm;

/// Answers queued up front; an exhausted queue answers "no".
#[derive(Default)]
pub(crate) struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    pub(crate) asked: RefCell<Vec<String>>,
}

impl Confirm for ScriptedPrompt {
    fn confirm(&self, question: &str) -> bool {
        self.asked.borrow_mut().push(question.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

/// Records every external call. `extract_at` creates the configured roots
/// in the destination so re-attachment can be observed.
#[derive(Default)]
pub(crate) struct RecordingActions {
    pub(crate) calls: RefCell<Vec<(&'static str, Vec<PathBuf>)>>,
    pub(crate) fail: RefCell<Option<&'static str>>,
    pub(crate) roots: RefCell<Vec<String>>,
}

impl RecordingActions {
    fn record(&self, action: &'static str, paths: Vec<PathBuf>) -> Result<()> {
        self.calls.borrow_mut().push((action, paths));
        if *self.fail.borrow() == Some(action) {
            return Err(ToolError::ExternalActionFailed(action.to_string(), Some(2)));
        }
        Ok(())
    }

    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|(name, _)| *name).collect()
    }

    pub(crate) fn targets(&self, action: &str) -> Vec<PathBuf> {
        self.calls
            .borrow()
            .iter()
            .filter(|(name, _)| *name == action)
            .flat_map(|(_, paths)| paths.clone())
            .collect()
    }
}

impl ExternalActions for RecordingActions {
    fn build_at(&self, package: &Path) -> Result<()> {
        self.record("build", vec![package.to_path_buf()])
    }

    fn clean_at(&self, package: &Path) -> Result<()> {
        self.record("clean", vec![package.to_path_buf()])
    }

    fn archive_at(&self, packages: &[PathBuf], destination: &Path) -> Result<()> {
        let mut paths = packages.to_vec();
        paths.push(destination.to_path_buf());
        self.record("archive", paths)
    }

    fn extract_at(&self, archive: &Path, dest_dir: &Path) -> Result<()> {
        self.record("extract", vec![archive.to_path_buf(), dest_dir.to_path_buf()])?;
        for root in self.roots.borrow().iter() {
            fs::create_dir_all(dest_dir.join(root))?;
        }
        Ok(())
    }

    fn archive_roots(&self, _archive: &Path) -> Result<Vec<String>> {
        Ok(self.roots.borrow().clone())
    }

    fn run_program(&self, package: &Path, program: &str, _args: &[String]) -> Result<Option<i32>> {
        self.record("run", vec![package.join("bin").join(program)])?;
        Ok(Some(0))
    }
}

pub(crate) struct Fixture {
    dir: TempDir,
    pub(crate) store: RegistryStore,
    pub(crate) actions: RecordingActions,
    pub(crate) prompt: ScriptedPrompt,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let registry_dir = dir.path().join("share").join("cmake_tool");
        fs::create_dir_all(&registry_dir).unwrap();
        let store = RegistryStore::new(registry_dir.join("create.info"))
            .with_home(Some(dir.path().join("home")));

        Self {
            dir,
            store,
            actions: RecordingActions::default(),
            prompt: ScriptedPrompt::default(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `<root>/<rel>` and returns its path.
    pub(crate) fn package(&self, rel: &str) -> String {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path.to_string_lossy().into_owned()
    }

    /// Path under the root that does not exist on disk.
    pub(crate) fn missing(&self, rel: &str) -> String {
        self.dir.path().join(rel).to_string_lossy().into_owned()
    }

    /// Writes the four templates next to the registry so the fixture root
    /// is a complete install.
    pub(crate) fn install_templates(&self) -> InstallLayout {
        let dir = self.dir.path().join("share").join("cmake_tool");
        fs::write(dir.join(CPP_CMAKE_TEMPLATE), "project(%%PROJECT_NAME%% CXX)\n").unwrap();
        fs::write(dir.join(CPP_MAIN_TEMPLATE), "int main() { return 0; }\n").unwrap();
        fs::write(dir.join(C_CMAKE_TEMPLATE), "project(%%PROJECT_NAME%% C)\n").unwrap();
        fs::write(dir.join(C_MAIN_TEMPLATE), "int main(void) { return 0; }\n").unwrap();
        InstallLayout::from_root(self.dir.path()).unwrap()
    }

    pub(crate) fn register(&self, paths: &[&str]) {
        let entries: Vec<String> = paths.iter().map(|p| (*p).to_string()).collect();
        self.store.rewrite(&entries).unwrap();
    }

    pub(crate) fn answer(&self, answers: &[bool]) {
        self.prompt.answers.borrow_mut().extend(answers.iter().copied());
    }

    pub(crate) fn asked(&self) -> usize {
        self.prompt.asked.borrow().len()
    }

    pub(crate) fn context(&self, options: Options) -> Context<'_> {
        self.context_with_store(self.store.clone(), options)
    }

    pub(crate) fn context_with_store(&self, store: RegistryStore, options: Options) -> Context<'_> {
        Context::new(store, &self.actions, &self.prompt).with_options(options)
    }
}
