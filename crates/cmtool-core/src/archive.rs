use std::path::{Path, PathBuf};

use cmtool_constants::{ARCHIVE_EXTENSION, ARCHIVE_MARKER, DEFAULT_ARCHIVE_NAME};
use cmtool_error::{Result, ToolError};
use cmtool_utils::{absolute_path, basename, expand_home};

use crate::attach::AttachManager;
use crate::bulk;
use crate::context::Context;
use crate::dispatch::Dispatch;
use crate::report::report_error;

/// Where an archive of `members` goes for the `--output` value `output`.
///
/// An output containing `.tar.` names the archive itself; anything else is a
/// directory that receives `<name>.tar.gz` (one package) or the default
/// bundle name (several).
pub fn resolve_destination(output: &str, members: &[String], home: Option<&Path>) -> Result<PathBuf> {
    let output = output.trim();
    let output = if output.is_empty() { "./" } else { output };
    let expanded = expand_home(output, home);

    let raw = if expanded.contains(ARCHIVE_MARKER) {
        if expanded.contains('/') {
            expanded
        } else {
            format!("./{expanded}")
        }
    } else {
        let name = match members {
            [single] => format!("{}{ARCHIVE_EXTENSION}", basename(single)),
            _ => DEFAULT_ARCHIVE_NAME.to_string(),
        };
        Path::new(&expanded).join(name).to_string_lossy().into_owned()
    };

    let destination = PathBuf::from(absolute_path(&raw, home));
    match destination.parent() {
        Some(parent) if parent.is_dir() => Ok(destination),
        _ => Err(ToolError::InvalidOperation(format!(
            "output directory for \"{}\" does not exist",
            destination.display()
        ))),
    }
}

pub struct ArchiveManager<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> ArchiveManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    /// Pack the packages named by `tokens`. Any token that cannot be resolved
    /// aborts the whole archive.
    pub fn tar(&self, tokens: &[String], output: &str) -> Result<PathBuf> {
        let mut members: Vec<String> = Vec::new();

        for token in tokens {
            let mut resolved = Vec::new();
            let outcome = Dispatch::new(self.ctx, "tar").run(token, |path| {
                resolved.push(path.to_string());
                Ok(())
            });

            match outcome {
                Ok(()) => {}
                Err(ToolError::PackageNotFound(_)) => {
                    let full = absolute_path(token, self.ctx.store.home());
                    if !Path::new(&full).is_dir() {
                        return Err(ToolError::PackageNotFound(token.clone()));
                    }
                    self.ctx
                        .debug(&format!("\"{full}\" is not registered, archiving it as-is"));
                    resolved.push(full);
                }
                Err(err) => return Err(err),
            }

            for path in resolved {
                if !Path::new(&path).exists() {
                    return Err(ToolError::PackageNotFound(path));
                }
                if !members.contains(&path) {
                    members.push(path);
                }
            }
        }

        if members.is_empty() {
            return Err(ToolError::InvalidOperation(
                "No package was specified to tar!".to_string(),
            ));
        }

        let destination = resolve_destination(output, &members, self.ctx.store.home())?;
        self.pack(&members, &destination)?;
        Ok(destination)
    }

    /// Pack every registered package after one confirmation.
    pub fn tar_all(&self, output: &str) -> Result<Option<PathBuf>> {
        self.ctx.traced("tar", "--all", || self.tar_batch(output))
    }

    fn tar_batch(&self, output: &str) -> Result<Option<PathBuf>> {
        let packages = bulk::registered_packages(self.ctx)?;
        let destination = resolve_destination(output, &packages, self.ctx.store.home())?;

        let question = format!("Tar above packages to \"{}\"?", destination.display());
        if !bulk::confirm_batch(self.ctx, &packages, &question) {
            return Ok(None);
        }

        self.pack(&packages, &destination)?;
        Ok(Some(destination))
    }

    fn pack(&self, members: &[String], destination: &Path) -> Result<()> {
        self.ctx
            .info(&format!(">> tar start: \"{}\"", destination.display()));
        let paths: Vec<PathBuf> = members.iter().map(PathBuf::from).collect();
        self.ctx.actions.archive_at(&paths, destination)?;
        self.ctx
            .success(&format!("<< tar success: \"{}\"", destination.display()));
        Ok(())
    }

    /// Unpack `archive` into `output_dir` and attach every top-level
    /// directory it contained. Returns the extracted top-level paths.
    pub fn untar(&self, archive: &str, output_dir: &str) -> Result<Vec<PathBuf>> {
        let home = self.ctx.store.home();
        let archive = PathBuf::from(absolute_path(archive, home));
        if !archive.is_file() {
            return Err(ToolError::PackageNotFound(archive.display().to_string()));
        }

        let output_dir = if output_dir.trim().is_empty() { "." } else { output_dir };
        let dest_dir = PathBuf::from(absolute_path(output_dir, home));
        if !dest_dir.is_dir() {
            return Err(ToolError::InvalidOperation(format!(
                "output directory \"{}\" does not exist",
                dest_dir.display()
            )));
        }

        self.ctx
            .info(&format!(">> untar start: \"{}\"", archive.display()));
        self.ctx.actions.extract_at(&archive, &dest_dir)?;

        let attacher = AttachManager::new(self.ctx).quiet();
        let mut extracted = Vec::new();
        for root in self.ctx.actions.archive_roots(&archive)? {
            let path = dest_dir.join(&root);
            println!("    {}", path.display());
            if path.is_dir() {
                if let Err(err) = attacher.attach(&path.to_string_lossy()) {
                    report_error("attach", &err);
                }
            }
            extracted.push(path);
        }

        self.ctx
            .success(&format!("<< untar success: \"{}\"", dest_dir.display()));
        Ok(extracted)
    }
}
