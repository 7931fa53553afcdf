use std::path::Path;

use crate::counter::LineTally;
use crate::stats::{AggregateTally, LanguageTally};

pub const AGGREGATE_TITLE: &str = "Aggregated Totals";

/// Everything a formatter needs to render one result block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    /// Present in aggregate mode only.
    pub files_processed: Option<usize>,
    pub tally: LineTally,
    /// Empty unless a per-language breakdown was requested.
    pub by_language: Vec<LanguageTally>,
}

impl Report {
    /// Report for a single file, titled with its file name.
    #[must_use]
    pub fn for_file(path: &Path, tally: LineTally) -> Self {
        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy());
        Self {
            title: format!("Results for: {name}"),
            files_processed: None,
            tally,
            by_language: Vec::new(),
        }
    }

    #[must_use]
    pub fn aggregate(aggregate: &AggregateTally, by_language: bool) -> Self {
        Self {
            title: AGGREGATE_TITLE.to_string(),
            files_processed: Some(aggregate.files_processed),
            tally: aggregate.tally,
            by_language: if by_language {
                aggregate.by_language().into_iter().cloned().collect()
            } else {
                Vec::new()
            },
        }
    }
}
