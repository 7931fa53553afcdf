use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LineTallyError, Result};

/// Directory names that are never descended into.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    "dist",
    "build",
    "__pycache__",
];

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Whether a directory found during traversal should be walked.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct PathFilter {
    skip_dirs: HashSet<String>,
    exclude_patterns: GlobSet,
}

impl PathFilter {
    /// Create a filter that skips the default directories plus `extra_skip_dirs`,
    /// and excludes files matching any of `exclude_patterns`.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extra_skip_dirs: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LineTallyError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| LineTallyError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        let skip_dirs = DEFAULT_SKIP_DIRS
            .iter()
            .map(ToString::to_string)
            .chain(extra_skip_dirs.iter().cloned())
            .collect();

        Ok(Self {
            skip_dirs,
            exclude_patterns,
        })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(ToString::to_string).collect(),
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl FileFilter for PathFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_none_or(|name| !self.skip_dirs.contains(name))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
