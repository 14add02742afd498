use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use cmtool_constants::{ARCHIVE_EXCLUDES, BIN_DIR, BUILD_DIR, INSTALL_MANIFEST};
use cmtool_error::{Result, ToolError};

use crate::ExternalActions;
use crate::archive;

/// Runs the real `cmake`, `make` and `tar` binaries.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellActions;

impl ShellActions {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn describe(command: &Command) -> String {
        let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
        parts.extend(command.get_args().map(|arg| arg.to_string_lossy().into_owned()));
        let line = parts.join(" ");

        match command.get_current_dir() {
            Some(dir) => format!("(cd {} && {line})", dir.display()),
            None => line,
        }
    }

    fn spawn_failed(display: &str, err: &std::io::Error) -> ToolError {
        ToolError::ExternalActionFailed(format!("{display} ({err})"), None)
    }

    fn run(command: &mut Command) -> Result<()> {
        let display = Self::describe(command);
        cmtool_logger::shell(&display);

        let status = command
            .status()
            .map_err(|e| Self::spawn_failed(&display, &e))?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::ExternalActionFailed(display, status.code()))
        }
    }

    fn run_quietly(command: &mut Command) -> bool {
        cmtool_logger::shell(&Self::describe(command));
        command
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn uninstall_manifest(build_dir: &Path) {
        let manifest = build_dir.join(INSTALL_MANIFEST);
        let Ok(content) = fs::read_to_string(&manifest) else {
            return;
        };

        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            println!("    rm -f {line}");
            let installed = Path::new(line);
            let _ = fs::remove_file(installed);
            Self::remove_empty_ancestors(installed);
        }
    }

    /// Walks up from the file's directory removing directories until one is
    /// not empty (or cannot be removed).
    fn remove_empty_ancestors(file: &Path) {
        let mut current = file.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() || fs::remove_dir(dir).is_err() {
                break;
            }
            current = dir.parent();
        }
    }
}

impl ExternalActions for ShellActions {
    fn build_at(&self, package: &Path) -> Result<()> {
        let build_dir = package.join(BUILD_DIR);
        fs::create_dir_all(&build_dir).map_err(|e| {
            ToolError::FilesystemAccessDenied(build_dir.display().to_string(), e.to_string())
        })?;

        Self::run(Command::new("cmake").arg("..").current_dir(&build_dir))?;
        Self::run(Command::new("make").current_dir(&build_dir))?;
        Self::run(Command::new("make").arg("install").current_dir(&build_dir))
    }

    fn clean_at(&self, package: &Path) -> Result<()> {
        let build_dir = package.join(BUILD_DIR);
        if !build_dir.exists() {
            return Ok(());
        }

        // A failed `make clean` still leaves the manifest usable.
        Self::run_quietly(Command::new("make").arg("clean").current_dir(&build_dir));
        Self::uninstall_manifest(&build_dir);

        println!("    rm -rf {}", build_dir.display());
        fs::remove_dir_all(&build_dir).map_err(|e| {
            ToolError::FilesystemAccessDenied(build_dir.display().to_string(), e.to_string())
        })
    }

    fn archive_at(&self, packages: &[PathBuf], destination: &Path) -> Result<()> {
        let mut command = Command::new("tar");
        command.arg("-acf").arg(destination);

        for pattern in ARCHIVE_EXCLUDES {
            command.arg(format!("--exclude={pattern}"));
        }

        for package in packages {
            let (parent, name) = archive::split_member(package);
            match parent {
                Some(parent) => {
                    command.arg("-C").arg(parent).arg(name);
                }
                None => {
                    command.arg(name);
                }
            }
        }

        Self::run(&mut command)
    }

    fn extract_at(&self, archive: &Path, dest_dir: &Path) -> Result<()> {
        Self::run(
            Command::new("tar")
                .arg("-axf")
                .arg(archive)
                .arg("-C")
                .arg(dest_dir),
        )
    }

    fn archive_roots(&self, archive: &Path) -> Result<Vec<String>> {
        if let Some(roots) = archive::read_roots(archive)? {
            return Ok(roots);
        }

        let mut command = Command::new("tar");
        command.arg("-tf").arg(archive);
        let display = Self::describe(&command);
        cmtool_logger::shell(&display);

        let output = command
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Self::spawn_failed(&display, &e))?;
        if !output.status.success() {
            return Err(ToolError::ExternalActionFailed(display, output.status.code()));
        }

        Ok(archive::roots_from_listing(&String::from_utf8_lossy(
            &output.stdout,
        )))
    }

    fn run_program(&self, package: &Path, program: &str, args: &[String]) -> Result<Option<i32>> {
        let program_path = package.join(BIN_DIR).join(program);
        let mut command = Command::new(&program_path);
        command.args(args);

        let display = Self::describe(&command);
        cmtool_logger::shell(&display);

        let status = command
            .status()
            .map_err(|e| Self::spawn_failed(&display, &e))?;
        Ok(status.code())
    }
}
