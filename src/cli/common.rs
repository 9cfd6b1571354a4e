//! Helpers shared by subcommands.

use crate::{
    cli::Cli,
    config::{ConfigDiagnostic, find_config_file},
    log,
};
use anyhow::{Result, bail};
use std::path::PathBuf;

/// Locate the config file named by `--config`.
///
/// Relative names are searched upward from the current directory.
pub fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    match find_config_file(&cli.config) {
        Some(path) => Ok(path),
        None => {
            log!("hint"; "run `docus init` to create a new config");
            bail!("config file '{}' not found", cli.config.display())
        }
    }
}

/// Print validation warnings in the grouped format.
pub fn print_warnings(warnings: &[ConfigDiagnostic]) {
    if warnings.is_empty() {
        return;
    }
    log!("warning"; "config has {} warning(s):", warnings.len());
    for warning in warnings {
        eprintln!("- {}: {}", warning.field, warning.message);
    }
}
