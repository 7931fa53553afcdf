use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LineTallyError, Result};
use crate::language::LanguageKind;

/// Top-level configuration, read from `.linetally.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Extra extension mappings onto built-in languages, e.g. `mjs = "javascript"`.
    #[serde(default)]
    pub languages: HashMap<String, LanguageKind>,
}

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Directory names skipped in addition to the built-in list.
    #[serde(default)]
    pub skip_dirs: Vec<String>,

    /// Glob patterns for files to leave out of directory scans.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Reject values that parse but make no sense.
    ///
    /// # Errors
    /// Returns a configuration error for empty extension aliases or skip-dir names.
    pub fn validate(&self) -> Result<()> {
        if let Some(ext) = self
            .languages
            .keys()
            .find(|ext| ext.trim_start_matches('.').trim().is_empty())
        {
            return Err(LineTallyError::Config(format!(
                "languages: extension alias '{ext}' is empty"
            )));
        }

        if self.scanner.skip_dirs.iter().any(|dir| dir.trim().is_empty()) {
            return Err(LineTallyError::Config(
                "scanner.skip_dirs: directory names must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
