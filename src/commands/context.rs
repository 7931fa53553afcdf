use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::scanner::PathFilter;

/// Load configuration: an explicit path wins, `--no-config` yields defaults,
/// otherwise the loader searches its default locations.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Build the traversal filter from config plus command-line exclude patterns.
///
/// # Errors
/// Returns an error if any exclude pattern is not a valid glob.
pub fn build_filter(config: &Config, cli_excludes: &[String]) -> crate::Result<PathFilter> {
    let mut exclude_patterns = config.scanner.exclude.clone();
    exclude_patterns.extend(cli_excludes.iter().cloned());
    PathFilter::new(&config.scanner.skip_dirs, &exclude_patterns)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
