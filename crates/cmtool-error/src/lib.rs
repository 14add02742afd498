use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    RegistryUnavailable(String),
    PackageNotFound(String),
    AmbiguousMatch(String, Vec<String>),
    ExternalActionFailed(String, Option<i32>),
    FilesystemAccessDenied(String, String),
    InvalidOperation(String),
    InvalidPackageType(String),
    TemplateError(String),
    IoError(String),
}

impl ToolError {
    /// Errors that abort the whole command rather than a single token.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::RegistryUnavailable(_))
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistryUnavailable(reason) => {
                write!(f, "Package registry unavailable: {reason}")
            }
            Self::PackageNotFound(token) => {
                write!(f, "Package '{token}' not found")
            }
            Self::AmbiguousMatch(token, candidates) => {
                write!(
                    f,
                    "Found {} packages named '{token}'",
                    candidates.len()
                )
            }
            Self::ExternalActionFailed(command, Some(code)) => {
                write!(f, "Command '{command}' failed with exit code {code}")
            }
            Self::ExternalActionFailed(command, None) => {
                write!(f, "Command '{command}' was terminated")
            }
            Self::FilesystemAccessDenied(path, reason) => {
                write!(f, "Cannot modify '{path}': {reason}")
            }
            Self::InvalidOperation(msg) => {
                write!(f, "Invalid operation: {msg}")
            }
            Self::InvalidPackageType(kind) => {
                write!(f, "'{kind}' is an invalid package type (expected CPP or C)")
            }
            Self::TemplateError(msg) => {
                write!(f, "Template error: {msg}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<anyhow::Error> for ToolError {
    fn from(err: anyhow::Error) -> Self {
        Self::InvalidOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;
