mod filter;

pub use filter::{DEFAULT_SKIP_DIRS, FileFilter, PathFilter};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// A path that could not be enumerated. Scanning continues past it.
#[derive(Error, Debug)]
pub enum ScanWarning {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Files found by a scan, in traversal order, plus any paths that were skipped.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub warnings: Vec<ScanWarning>,
}

impl ScanResult {
    fn extend(&mut self, other: Self) {
        self.files.extend(other.files);
        self.warnings.extend(other.warnings);
    }
}

/// Trait for expanding input paths into the files to classify.
pub trait FileScanner {
    /// Expand one path: a file is returned as-is, a directory is walked recursively.
    fn scan(&self, root: &Path) -> ScanResult;

    /// Scan several paths, concatenating results in input order.
    fn scan_all(&self, paths: &[PathBuf]) -> ScanResult {
        let mut result = ScanResult::default();
        for path in paths {
            result.extend(self.scan(path));
        }
        result
    }
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn walk(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || self.filter.should_descend(e.path())
            });

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                        result.files.push(entry.into_path());
                    }
                }
                Err(err) => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    result.warnings.push(ScanWarning::Unreadable {
                        path,
                        source: err.into(),
                    });
                }
            }
        }

        result
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> ScanResult {
        let metadata = match fs::metadata(root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return ScanResult {
                    files: Vec::new(),
                    warnings: vec![ScanWarning::NotFound(root.to_path_buf())],
                };
            }
            Err(e) => {
                return ScanResult {
                    files: Vec::new(),
                    warnings: vec![ScanWarning::Unreadable {
                        path: root.to_path_buf(),
                        source: e,
                    }],
                };
            }
        };

        if metadata.is_dir() {
            self.walk(root)
        } else if metadata.is_file() {
            ScanResult {
                files: vec![root.to_path_buf()],
                warnings: Vec::new(),
            }
        } else {
            ScanResult::default()
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
