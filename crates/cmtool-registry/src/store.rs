use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use cmtool_constants::REGISTRY_BACKUP_SUFFIX;
use cmtool_error::{Result, ToolError};
use cmtool_utils::{entry_key, expand_home};
use tempfile::NamedTempFile;

/// Flat-file list of registered package paths, one per line.
///
/// Lines starting with `~` are expanded to the home directory on every read;
/// writes persist whatever literal path the caller handed in.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
    home: Option<PathBuf>,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            home: dirs::home_dir(),
        }
    }

    #[must_use]
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(REGISTRY_BACKUP_SUFFIX);
        PathBuf::from(name)
    }

    fn directory(&self) -> Result<&Path> {
        match self.path.parent() {
            Some(dir) if dir.as_os_str().is_empty() || dir.is_dir() => Ok(dir),
            _ => Err(ToolError::RegistryUnavailable(format!(
                "directory of {} does not exist",
                self.path.display()
            ))),
        }
    }

    fn unavailable(&self, err: &io::Error) -> ToolError {
        ToolError::RegistryUnavailable(format!("{}: {err}", self.path.display()))
    }

    fn denied(&self, err: &io::Error) -> ToolError {
        ToolError::FilesystemAccessDenied(self.path.display().to_string(), err.to_string())
    }

    fn parse(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| expand_home(line, self.home()))
            .collect()
    }

    /// Every registered path in file order, with `~` expanded.
    pub fn load(&self) -> Result<Vec<String>> {
        self.directory()?;

        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(self.parse(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.unavailable(&e)),
        }
    }

    /// Replace the whole registry. The new content goes to a temporary file
    /// in the same directory and is renamed over the original, so an
    /// interrupted rewrite leaves the old file intact.
    pub fn rewrite(&self, entries: &[String]) -> Result<()> {
        let dir = self.directory()?;
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.denied(&e))?;
        for entry in entries.iter().filter(|entry| !entry.trim().is_empty()) {
            writeln!(temp, "{entry}").map_err(|e| self.denied(&e))?;
        }
        temp.flush().map_err(|e| self.denied(&e))?;
        temp.persist(&self.path)
            .map_err(|e| self.denied(&e.error))?;

        cmtool_logger::debug(
            &format!("Rewrote registry with {} entries", entries.len()),
            false,
        );
        Ok(())
    }

    /// Add `entry` unless an equal path is already registered.
    /// Returns whether the file changed.
    pub fn append(&self, entry: &str) -> Result<bool> {
        self.directory()?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.unavailable(&e))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| self.unavailable(&e))?;

        let wanted = entry_key(entry, self.home());
        if self
            .parse(&content)
            .iter()
            .any(|existing| entry_key(existing, self.home()) == wanted)
        {
            return Ok(false);
        }

        let separator = if content.is_empty() || content.ends_with('\n') {
            ""
        } else {
            "\n"
        };
        let line = format!("{separator}{entry}\n");

        file.seek(SeekFrom::End(0)).map_err(|e| self.denied(&e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.denied(&e))?;
        Ok(true)
    }

    /// Drop every line naming the same path as `entry`. Returns whether any
    /// was present.
    pub fn remove(&self, entry: &str) -> Result<bool> {
        let entries = self.load()?;
        let before = entries.len();
        let unwanted = entry_key(entry, self.home());
        let kept: Vec<String> = entries
            .into_iter()
            .filter(|existing| entry_key(existing, self.home()) != unwanted)
            .collect();

        if kept.len() == before {
            return Ok(false);
        }
        self.rewrite(&kept)?;
        Ok(true)
    }

    /// Keep only entries whose target still exists on disk.
    /// Returns the entries that were dropped.
    pub fn prune(&self) -> Result<Vec<String>> {
        let (kept, dropped): (Vec<String>, Vec<String>) = self
            .load()?
            .into_iter()
            .partition(|entry| Path::new(entry).exists());

        if self.path.exists() {
            self.rewrite(&kept)?;
        }
        Ok(dropped)
    }

    /// Move the registry aside to `<file>.bak`, leaving an empty registry.
    pub fn backup(&self) -> Result<PathBuf> {
        self.directory()?;
        let backup = self.backup_path();

        if self.path.exists() {
            fs::rename(&self.path, &backup).map_err(|e| self.denied(&e))?;
        }
        Ok(backup)
    }
}
