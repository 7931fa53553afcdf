//! Aggregation of per-file tallies.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::counter::LineTally;
use crate::language::LanguageKind;

/// Tally of one successfully classified file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTally {
    pub path: PathBuf,
    pub language: LanguageKind,
    pub tally: LineTally,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTally {
    pub language: LanguageKind,
    pub files: usize,
    #[serde(flatten)]
    pub tally: LineTally,
}

/// Element-wise sum of file tallies, plus the number of files that went into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTally {
    pub tally: LineTally,
    pub files_processed: usize,
    by_language: BTreeMap<LanguageKind, LanguageTally>,
}

impl AggregateTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: &FileTally) {
        self.tally += &file.tally;
        self.files_processed += 1;

        let entry = self
            .by_language
            .entry(file.language)
            .or_insert_with(|| LanguageTally {
                language: file.language,
                files: 0,
                tally: LineTally::new(),
            });
        entry.files += 1;
        entry.tally += &file.tally;
    }

    /// Per-language subtotals, ordered by language.
    #[must_use]
    pub fn by_language(&self) -> Vec<&LanguageTally> {
        self.by_language.values().collect()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files_processed == 0
    }
}

impl<'a> FromIterator<&'a FileTally> for AggregateTally {
    fn from_iter<I: IntoIterator<Item = &'a FileTally>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        for file in iter {
            aggregate.add(file);
        }
        aggregate
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
