pub mod archive;
pub mod shell;

use std::path::{Path, PathBuf};

use cmtool_error::Result;

pub use shell::ShellActions;

/// Everything the lifecycle layer delegates to outside tools. Each call blocks
/// until the tool exits; a nonzero exit becomes `ExternalActionFailed`.
pub trait ExternalActions {
    /// Configure, build and install the package in `<package>/build`.
    fn build_at(&self, package: &Path) -> Result<()>;

    /// Remove installed files and the build cache of the package.
    fn clean_at(&self, package: &Path) -> Result<()>;

    /// Pack `packages` into the archive at `destination`.
    fn archive_at(&self, packages: &[PathBuf], destination: &Path) -> Result<()>;

    /// Unpack `archive` into `dest_dir`.
    fn extract_at(&self, archive: &Path, dest_dir: &Path) -> Result<()>;

    /// Sorted, de-duplicated first path components of the archive entries.
    fn archive_roots(&self, archive: &Path) -> Result<Vec<String>>;

    /// Run `<package>/bin/<program>` with `args`. Returns the exit code.
    fn run_program(&self, package: &Path, program: &str, args: &[String]) -> Result<Option<i32>>;
}
