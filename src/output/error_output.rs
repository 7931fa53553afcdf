//! Uniform error, warning and note output on stderr, with color support.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`

use std::error::Error as _;
use std::io::{IsTerminal, Write};

use crate::error::LineTallyError;

use super::ColorMode;
use super::ansi;

/// Diagnostic writer for stderr.
#[derive(Debug, Clone, Copy)]
pub struct ErrorOutput {
    use_colors: bool,
    quiet: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            quiet: false,
        }
    }

    /// Suppress warnings and notes. Errors are always printed.
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // https://no-color.org: presence of the variable disables color
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::stderr().is_terminal()
            }
        }
    }

    /// Prints a crate error with its source as detail and its suggestion, if any.
    pub fn print_error(&self, error: &LineTallyError) {
        let detail = error.source().map(ToString::to_string);
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            error.suggestion(),
        );
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>) {
        if self.quiet {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    pub fn print_note(&self, message: &str) {
        if self.quiet {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        self.write_note(&mut stderr, message);
    }

    /// Writes an error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are ignored: there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        self.write_detail(w, detail);

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }

        self.write_detail(w, detail);
    }

    /// Writes an informational note to a writer.
    pub fn write_note<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(w, "{}{message}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "{message}");
        }
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            quiet: false,
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
