use serde::Serialize;

use crate::counter::LineTally;
use crate::error::Result;
use crate::stats::LanguageTally;

use super::{Report, ReportFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    files_processed: Option<usize>,
    #[serde(flatten)]
    tally: &'a LineTally,
    #[serde(skip_serializing_if = "Option::is_none")]
    by_language: Option<&'a [LanguageTally]>,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonReport {
            title: &report.title,
            files_processed: report.files_processed,
            tally: &report.tally,
            by_language: (!report.by_language.is_empty())
                .then_some(report.by_language.as_slice()),
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
