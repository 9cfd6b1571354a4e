//! `docus show`: print the config as the theme receives it.

use crate::{
    cli::{Cli, common},
    config::{AppConfig, ConfigFormat, LoadOptions, SiteConfig},
    embed::Preset,
    provider::ConfigProvider,
};
use anyhow::{Context, Result};

/// Print the provided config (or its resolved social links) to stdout.
pub fn show_config(
    cli: &Cli,
    format: ConfigFormat,
    preset: Option<Preset>,
    socials: bool,
) -> Result<()> {
    let provider = match preset {
        Some(preset) => ConfigProvider::from_preset(preset)
            .with_context(|| format!("bundled preset '{}' is invalid", preset.name()))?,
        None => {
            let path = common::resolve_config_path(cli)?;
            ConfigProvider::from_path(&path, LoadOptions::default())?
        }
    };
    common::print_warnings(provider.warnings());

    let config = provider.provide();
    let output = if socials {
        render_socials(&config, format)?
    } else {
        render_config(&config, format)?
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Render the config wrapped in its `docus` table.
pub fn render_config(config: &SiteConfig, format: ConfigFormat) -> Result<String> {
    let app = AppConfig {
        docus: config.clone(),
    };
    Ok(app.to_string_as(format)?)
}

/// Render resolved social links, one `platform = url` per line for TOML.
pub fn render_socials(config: &SiteConfig, format: ConfigFormat) -> Result<String> {
    let links = config
        .socials
        .as_ref()
        .map(|s| s.links())
        .unwrap_or_default();

    Ok(match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&links)?,
        ConfigFormat::Toml => links
            .iter()
            .map(|link| {
                let url = link.url.as_deref().unwrap_or("");
                format!("{} = {:?}\n", link.platform, url)
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_preserves_wire_keys() {
        let provider = ConfigProvider::from_preset(Preset::Karamel).unwrap();
        let json = render_config(&provider.provide(), ConfigFormat::Json).unwrap();
        assert!(json.contains("\"showLinkIcon\": true"));
        assert!(json.contains("\"textLinks\""));
        assert!(!json.contains("iconLinks"));

        let back = AppConfig::from_json_str(&json).unwrap();
        assert_eq!(back.docus, *provider.config());
    }

    #[test]
    fn test_render_socials_toml() {
        let provider = ConfigProvider::from_preset(Preset::Karamel).unwrap();
        let out = render_socials(provider.config(), ConfigFormat::Toml).unwrap();
        assert_eq!(
            out,
            "github = \"https://github.com/tghsjtmk\"\n\
             instagram = \"https://www.instagram.com/teguh.sujatmiko\"\n\
             twitter = \"https://twitter.com/tghsjtmk\"\n"
        );
    }

    #[test]
    fn test_render_socials_absent() {
        let out = render_socials(&SiteConfig::default(), ConfigFormat::Json).unwrap();
        assert_eq!(out, "[]");
    }
}
