//! `docus check`: load and validate the config file.

use crate::{
    cli::{Cli, common},
    config::{ConfigError, LoadOptions},
    log,
    provider::ConfigProvider,
};
use anyhow::{Context, Result};

/// Validate the config, printing warnings. Fails on any schema error.
pub fn check_config(cli: &Cli, strict: bool) -> Result<()> {
    let path = common::resolve_config_path(cli)?;

    let provider = match ConfigProvider::from_path(&path, LoadOptions { strict }) {
        Ok(provider) => provider,
        // Schema errors already carry field paths; don't wrap them.
        Err(ConfigError::Schema(diag)) => return Err(diag.into()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to load '{}'", path.display()));
        }
    };

    common::print_warnings(provider.warnings());

    let config = provider.config();
    log!(
        "check";
        "{} is valid ({})",
        path.display(),
        config.title.as_deref().unwrap_or("untitled")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigFormat, LoadOptions};
    use crate::provider::ConfigProvider;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_valid_file_loads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docus.toml");
        fs::write(&path, crate::embed::Preset::Handbook.source()).unwrap();

        let provider = ConfigProvider::from_path(&path, LoadOptions { strict: true }).unwrap();
        assert!(provider.warnings().is_empty());
    }

    #[test]
    fn test_schema_error_lists_paths() {
        let err = ConfigProvider::from_literal(
            "[docus]\nimage = \"logo.png\"\n[docus.aside]\nlevel = -1",
            ConfigFormat::Toml,
            LoadOptions::default(),
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("docus.image"));
        assert!(message.contains("docus.aside.level"));
    }
}
