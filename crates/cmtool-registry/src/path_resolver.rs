use std::path::Path;

use cmtool_utils::{absolute_path, basename, entry_key, expand_home};

/// Outcome of looking a user token up in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The token named a registered path exactly.
    FullPathMatch(String),
    /// Registered paths whose last segment equals the token. Empty means
    /// the token is unknown.
    BasenameMatches(Vec<String>),
}

impl MatchResult {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BasenameMatches(paths) if paths.is_empty())
    }
}

pub struct PathResolver;

impl PathResolver {
    /// Classify `token` against `entries`. A full-path match anywhere wins
    /// over any number of basename matches.
    #[must_use]
    pub fn resolve(token: &str, entries: &[String], home: Option<&Path>) -> MatchResult {
        let full = absolute_path(token, home);
        let mut by_name = Vec::new();

        for raw in entries {
            let entry = expand_home(raw, home);
            if entry_key(&entry, home) == full {
                return MatchResult::FullPathMatch(entry);
            }
            if basename(&entry) == token {
                by_name.push(entry);
            }
        }

        MatchResult::BasenameMatches(by_name)
    }
}
