use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LineTallyError, Result};
use crate::language::LanguageProfile;

use super::comment::{CommentDetector, LineRemainder};
use super::tally::{LineClass, LineTally};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Per-file scan state. Never shared between files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierState {
    pub in_block_comment: bool,
}

pub struct LineClassifier<'a> {
    profile: &'a LanguageProfile,
    detector: CommentDetector<'a>,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(profile: &'a LanguageProfile) -> Self {
        Self {
            profile,
            detector: CommentDetector::new(&profile.comment_syntax),
        }
    }

    /// Classify a whole source text.
    ///
    /// Lines are split on `\n` with an optional preceding `\r`, so a trailing
    /// terminator yields one final blank line. Empty input yields an all-zero
    /// tally.
    #[must_use]
    pub fn count(&self, source: &str) -> LineTally {
        let mut tally = LineTally::new();
        if source.is_empty() {
            return tally;
        }

        let mut state = ClassifierState::default();
        for line in source.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            tally.record(self.classify_line(line, &mut state));
        }

        tally
    }

    /// Classify lines from a buffered reader (streaming, memory-efficient for large files).
    ///
    /// Line semantics match [`LineClassifier::count`]; invalid UTF-8 is decoded lossily.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<LineTally> {
        let mut tally = LineTally::new();
        let mut state = ClassifierState::default();
        let mut buf = Vec::new();
        let mut ends_with_newline = false;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            ends_with_newline = buf.last() == Some(&b'\n');

            let text = String::from_utf8_lossy(&buf);
            let line = text.strip_suffix('\n').unwrap_or(&text);
            let line = line.strip_suffix('\r').unwrap_or(line);
            tally.record(self.classify_line(line, &mut state));
        }

        if ends_with_newline {
            tally.record(self.classify_line("", &mut state));
        }

        Ok(tally)
    }

    /// Read and classify a file. Large files are streamed.
    ///
    /// # Errors
    /// Returns [`LineTallyError::FileRead`] if the file cannot be opened or read.
    pub fn count_file(&self, path: &Path) -> Result<LineTally> {
        let to_error = |source| LineTallyError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(to_error)?;
        if metadata.len() >= LARGE_FILE_THRESHOLD {
            let file = File::open(path).map_err(to_error)?;
            return self.count_reader(BufReader::new(file)).map_err(to_error);
        }

        let bytes = fs::read(path).map_err(to_error)?;
        Ok(self.count(&String::from_utf8_lossy(&bytes)))
    }

    /// Classify one physical line, updating the block-comment state.
    pub fn classify_line(&self, line: &str, state: &mut ClassifierState) -> LineClass {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        let code = match self
            .detector
            .strip_block_comments(trimmed, &mut state.in_block_comment)
        {
            LineRemainder::Consumed => return LineClass::Comment,
            LineRemainder::Code(code) => code,
        };

        if self.detector.is_single_line_comment(&code) {
            return LineClass::Comment;
        }

        let code_part = self.detector.strip_trailing_comment(&code);
        LineClass::Code(self.profile.declarations.classify(code_part))
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
