use std::fmt::Write;

use crate::counter::LineTally;
use crate::error::Result;

use super::{Report, ReportFormatter};

/// Plain-text report, one `Label: value` per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl TextFormatter {
    fn write_tally(output: &mut String, tally: &LineTally, indent: &str) {
        let _ = writeln!(output, "{indent}Blank Lines: {}", tally.blank);
        let _ = writeln!(output, "{indent}Comment Lines: {}", tally.comment);
        let _ = writeln!(output, "{indent}Code Lines: {}", tally.code);
        let _ = writeln!(output, "{indent}  Imports: {}", tally.imports);
        let _ = writeln!(
            output,
            "{indent}  Class Declarations: {}",
            tally.class_declarations
        );
        let _ = writeln!(
            output,
            "{indent}  Interface Declarations: {}",
            tally.interface_declarations
        );
        let _ = writeln!(
            output,
            "{indent}  Function/Method Declarations: {}",
            tally.function_declarations
        );
        let _ = writeln!(output, "{indent}Total Lines: {}", tally.total);
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output);
        let _ = writeln!(output, "--- {} ---", report.title);
        if let Some(files) = report.files_processed {
            let _ = writeln!(output, "Files Processed: {files}");
        }
        Self::write_tally(&mut output, &report.tally, "");

        if !report.by_language.is_empty() {
            let _ = writeln!(output);
            let _ = writeln!(output, "--- By Language ---");
            for entry in &report.by_language {
                let noun = if entry.files == 1 { "file" } else { "files" };
                let _ = writeln!(
                    output,
                    "{} ({} {noun}):",
                    entry.language.name(),
                    entry.files
                );
                Self::write_tally(&mut output, &entry.tally, "  ");
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
