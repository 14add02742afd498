use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cmtool_error::ToolError;
use cmtool_utils::basename;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Cpp,
    C,
}

impl PackageKind {
    #[must_use]
    pub const fn main_extension(self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::C => "c",
        }
    }

    /// Guess the kind of an existing package from its generated main source.
    #[must_use]
    pub fn detect(package_dir: &Path) -> Option<Self> {
        let name = basename(&package_dir.to_string_lossy()).to_string();
        let src = package_dir.join("src");

        [Self::Cpp, Self::C]
            .into_iter()
            .find(|kind| src.join(format!("{name}.{}", kind.main_extension())).is_file())
    }
}

impl FromStr for PackageKind {
    type Err = ToolError;

    /// Empty means the default (C++). Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("CPP") {
            Ok(Self::Cpp)
        } else if trimmed.eq_ignore_ascii_case("C") {
            Ok(Self::C)
        } else {
            Err(ToolError::InvalidPackageType(s.to_string()))
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpp => write!(f, "C++"),
            Self::C => write!(f, "C"),
        }
    }
}

/// The package a lifecycle call is currently working on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageHandle {
    pub path: PathBuf,
    pub kind: Option<PackageKind>,
}

impl PackageHandle {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = PackageKind::detect(&path);
        Self { path, kind }
    }

    #[must_use]
    pub fn name(&self) -> String {
        basename(&self.path.to_string_lossy()).to_string()
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    #[must_use]
    pub fn build_dir(&self) -> PathBuf {
        self.path.join(cmtool_constants::BUILD_DIR)
    }

    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        self.path.join(cmtool_constants::BIN_DIR)
    }
}

impl fmt::Display for PackageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(f, "{} ({kind})", self.path.display()),
            None => write!(f, "{}", self.path.display()),
        }
    }
}
