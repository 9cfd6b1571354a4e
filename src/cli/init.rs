//! Config file generation.
//!
//! Creates `docus.toml` from the commented template or a bundled preset.

use crate::{cli::Cli, config::SiteConfig, embed::Preset, log};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Generate config content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Docus configuration file (docus-config v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Uncomment a key to set it; unset keys use the theme defaults.\n\n");

    out.push_str(&SiteConfig::template_with_header());
    out
}

/// Content for a new config file.
pub fn config_content(preset: Option<Preset>) -> String {
    match preset {
        Some(preset) => preset.source().to_string(),
        None => generate_config_template(),
    }
}

/// Write a new config file, or print it with `dry`.
pub fn new_config(cli: &Cli, name: Option<&Path>, preset: Option<Preset>, dry: bool) -> Result<()> {
    let content = config_content(preset);
    if dry {
        print!("{content}");
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };
    let path = write_config(&root, &cli.config, &content)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Write `content` to `root/file_name`, refusing to overwrite.
pub fn write_config(root: &Path, file_name: &Path, content: &str) -> Result<PathBuf> {
    let path = root.join(file_name);
    if path.exists() {
        bail!(
            "Config file '{}' already exists.\n\
             Remove it or choose another directory.",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ConfigFormat, LoadOptions};
    use tempfile::TempDir;

    #[test]
    fn test_template_is_loadable_and_empty() {
        let template = generate_config_template();
        let (config, ignored) =
            AppConfig::parse_with_ignored(&template, ConfigFormat::Toml).unwrap();
        assert!(ignored.is_empty());
        assert!(config.validate(&[], LoadOptions::default()).is_empty());

        // only empty section tables, no values
        assert_eq!(config.docus.title, None);
        assert_eq!(config.docus.header.unwrap_or_default().fluid, None);
        assert!(config.docus.footer.unwrap_or_default().credits.is_none());
    }

    #[test]
    fn test_template_documents_keys() {
        let template = generate_config_template();
        assert!(template.contains("[docus]"));
        assert!(template.contains("# showLinkIcon = false"));
        assert!(template.contains("# level = 0"));
        assert!(template.contains("# href = \"https://docus.dev\""));
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        let path = write_config(&root, Path::new("docus.toml"), &config_content(None)).unwrap();

        assert_eq!(path, root.join("docus.toml"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[docus.header]"));
    }

    #[test]
    fn test_write_preset() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            Path::new("docus.toml"),
            &config_content(Some(Preset::Karamel)),
        )
        .unwrap();
        let (config, _) = AppConfig::from_path(&path).unwrap();
        assert_eq!(config.docus.title.as_deref(), Some("Teguh Sujatmiko"));
    }

    #[test]
    fn test_existing_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docus.toml");
        fs::write(&path, "custom content").unwrap();

        assert!(write_config(temp.path(), Path::new("docus.toml"), "new").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");
    }
}
