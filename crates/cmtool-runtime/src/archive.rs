use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path};

use cmtool_error::{Result, ToolError};
use flate2::read::GzDecoder;

/// Split a package path into the `-C` directory and the member name.
pub(crate) fn split_member(package: &Path) -> (Option<&Path>, &OsStr) {
    match (package.parent(), package.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => (Some(parent), name),
        _ => (None, package.as_os_str()),
    }
}

/// Top-level names from `tar -tf` style output.
pub(crate) fn roots_from_listing(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter_map(|line| first_component(Path::new(line.trim())))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn first_component(path: &Path) -> Option<String> {
    path.components().find_map(|component| match component {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    })
}

fn roots_of<R: Read>(reader: R, archive: &Path) -> Result<Vec<String>> {
    let unreadable = |e: std::io::Error| {
        ToolError::ExternalActionFailed(format!("read archive {} ({e})", archive.display()), None)
    };

    let mut tarball = tar::Archive::new(reader);
    let mut roots = BTreeSet::new();
    for entry in tarball.entries().map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path().map_err(unreadable)?;
        if let Some(root) = first_component(&path) {
            roots.insert(root);
        }
    }
    Ok(roots.into_iter().collect())
}

/// Reads `.tar`, `.tar.gz` and `.tgz` archives in-process. Other compressions
/// return `None` so the caller can ask the `tar` binary instead.
pub(crate) fn read_roots(archive: &Path) -> Result<Option<Vec<String>>> {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let gzipped = name.ends_with(".tar.gz") || name.ends_with(".tgz");
    if !gzipped && !name.ends_with(".tar") {
        return Ok(None);
    }

    let file = File::open(archive).map_err(|e| {
        ToolError::FilesystemAccessDenied(archive.display().to_string(), e.to_string())
    })?;

    let roots = if gzipped {
        roots_of(GzDecoder::new(file), archive)?
    } else {
        roots_of(file, archive)?
    };
    Ok(Some(roots))
}
