use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::counter::LineClassifier;
use crate::error::LineTallyError;
use crate::language::LanguageRegistry;
use crate::output::{ErrorOutput, Report};
use crate::scanner::{DirectoryScanner, FileScanner, ScanWarning};
use crate::stats::{AggregateTally, FileTally};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{build_filter, load_config};

pub const NO_FILES_MESSAGE: &str = "No processable files found in the specified paths.";

/// Result of counting a set of paths. Skipped paths are kept for reporting.
#[derive(Debug, Default)]
pub struct CountOutcome {
    pub aggregate: AggregateTally,
    pub scan_warnings: Vec<ScanWarning>,
    pub read_errors: Vec<LineTallyError>,
}

#[must_use]
pub fn run_count(cli: &Cli) -> i32 {
    let diagnostics = ErrorOutput::new(cli.color.into()).quiet(cli.quiet);

    match run_count_impl(cli, &diagnostics) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            diagnostics.print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Count the paths named on the command line and print the report to stdout.
///
/// A single regular file gets a per-file report; anything else is aggregated.
///
/// # Errors
/// Returns an error for invalid configuration, invalid exclude patterns, or
/// if the report cannot be rendered. Unreadable inputs are warnings, not errors.
pub fn run_count_impl(cli: &Cli, diagnostics: &ErrorOutput) -> crate::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let registry = LanguageRegistry::with_aliases(&config.languages);

    let report = if let Some(file) = single_file(&cli.paths) {
        match count_file(&registry, file) {
            Ok(file_tally) => Some(Report::for_file(file, file_tally.tally)),
            Err(e) => {
                warn_read_error(diagnostics, &e);
                None
            }
        }
    } else {
        let scanner = DirectoryScanner::new(build_filter(&config, &cli.exclude)?);
        let outcome = count_paths(&scanner, &registry, &cli.paths);

        for warning in &outcome.scan_warnings {
            diagnostics.print_warning(&warning.to_string(), None);
        }
        for error in &outcome.read_errors {
            warn_read_error(diagnostics, error);
        }
        if outcome.aggregate.is_empty() {
            diagnostics.print_note(NO_FILES_MESSAGE);
        }

        Some(Report::aggregate(&outcome.aggregate, cli.by_language))
    };

    if let Some(report) = report {
        let output = cli.format.formatter().format(&report)?;
        print!("{output}");
    }

    Ok(EXIT_SUCCESS)
}

/// Classify one file with the profile its extension selects.
///
/// # Errors
/// Returns [`LineTallyError::FileRead`] if the file cannot be read.
pub fn count_file(registry: &LanguageRegistry, path: &Path) -> crate::Result<FileTally> {
    let profile = registry.profile_for_path(path);
    let tally = LineClassifier::new(profile).count_file(path)?;
    Ok(FileTally {
        path: path.to_path_buf(),
        language: profile.kind,
        tally,
    })
}

/// Enumerate `paths` and sum the tallies of every file that could be read.
pub fn count_paths<S: FileScanner>(
    scanner: &S,
    registry: &LanguageRegistry,
    paths: &[PathBuf],
) -> CountOutcome {
    let scan = scanner.scan_all(paths);
    let mut outcome = CountOutcome {
        scan_warnings: scan.warnings,
        ..CountOutcome::default()
    };

    for path in &scan.files {
        match count_file(registry, path) {
            Ok(file_tally) => outcome.aggregate.add(&file_tally),
            Err(e) => outcome.read_errors.push(e),
        }
    }

    outcome
}

/// The lone path, if exactly one was given and it is a regular file.
fn single_file(paths: &[PathBuf]) -> Option<&Path> {
    match paths {
        [path] if path.is_file() => Some(path.as_path()),
        _ => None,
    }
}

fn warn_read_error(diagnostics: &ErrorOutput, error: &LineTallyError) {
    let detail = std::error::Error::source(error).map(ToString::to_string);
    diagnostics.print_warning(&error.to_string(), detail.as_deref());
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
