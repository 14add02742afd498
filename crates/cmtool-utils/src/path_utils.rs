use std::env;
use std::path::{Component, Path, PathBuf};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir_exists(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Replace a leading `~` (alone or followed by `/`) with `home`.
#[must_use]
pub fn expand_home(raw: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return raw.to_string();
    };

    match raw.strip_prefix('~') {
        Some("") => home.to_string_lossy().into_owned(),
        Some(rest) if rest.starts_with('/') => {
            format!("{}{rest}", home.to_string_lossy().trim_end_matches('/'))
        }
        _ => raw.to_string(),
    }
}

/// Final path segment, ignoring trailing separators. `\` counts as a separator.
#[must_use]
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        return path;
    }
    match trimmed.rfind(['/', '\\']) {
        Some(idx) => trimmed.get(idx + 1..).unwrap_or(trimmed),
        None => trimmed,
    }
}

/// Resolves `.` and `..` without touching the filesystem.
#[must_use]
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Comparison form of a registry entry: `~` expanded, `.`/`..` and repeated
/// or trailing separators folded. Two entries name the same package when
/// their keys are equal.
#[must_use]
pub fn entry_key(raw: &str, home: Option<&Path>) -> String {
    let expanded = expand_home(raw.trim(), home);
    normalize_lexically(Path::new(&expanded))
        .to_string_lossy()
        .into_owned()
}

/// Turn a user token into the absolute path string used for registry
/// comparison. Relative tokens are joined onto the current directory and
/// canonicalised when they exist on disk.
#[must_use]
pub fn absolute_path(token: &str, home: Option<&Path>) -> String {
    let expanded = expand_home(token.trim(), home);
    let path = Path::new(&expanded);

    let resolved = if path.is_absolute() {
        normalize_lexically(path)
    } else {
        let joined = env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path));
        joined
            .canonicalize()
            .unwrap_or_else(|_| normalize_lexically(&joined))
    };

    resolved.to_string_lossy().into_owned()
}
