//! Site configuration management for `docus.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── docus/     # [docus] and its sub-tables
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── format     # ConfigFormat (toml / json)
//! ├── util.rs        # URL checks, config file discovery
//! └── mod.rs         # AppConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section                     | Purpose                                |
//! |-----------------------------|----------------------------------------|
//! | `[docus]`                   | title, description, image, socials     |
//! | `[docus.aside]`             | sidebar depth and exclusions           |
//! | `[docus.header]`            | header layout toggles                  |
//! | `[docus.main]`              | content area layout toggles            |
//! | `[docus.footer]`            | credits, text links, icon links        |

pub mod section;
pub mod types;
pub(crate) mod util;

pub use section::{
    AsideConfig, Credits, FooterConfig, HeaderConfig, IconLink, MainConfig, SiteConfig,
    SocialLink, SocialPlatform, Socials, TextLink,
};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, ConfigFormat, FieldPath,
    SchemaValidationError,
};
pub use util::{find_config_file, find_config_file_from};

use crate::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `docus.toml`.
///
/// The theme settings live under a single `docus` table, mirroring the app
/// config the theme reads (`{ docus: { ... } }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Docus theme settings.
    #[serde(default)]
    pub docus: SiteConfig,
}

/// Options controlling how strictly a config source is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treat unknown keys as errors instead of warnings.
    pub strict: bool,
}

impl AppConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse_with_ignored(content, ConfigFormat::Toml).map(|(config, _)| config)
    }

    /// Parse configuration from JSON string
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse_with_ignored(content, ConfigFormat::Json).map(|(config, _)| config)
    }

    /// Read and parse a config file, collecting unknown fields.
    ///
    /// The format is picked from the file extension.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let format = ConfigFormat::from_path(path);
        debug!("load"; "read {} as {} ({} bytes)", path.display(), format.name(), content.len());
        Self::parse_with_ignored(&content, format)
    }

    /// Parse content, collecting any unknown fields as dotted paths.
    ///
    /// A value of the wrong type fails with [`ConfigError::Schema`] naming
    /// the field (e.g. `docus.footer.credits.href`); malformed syntax fails
    /// with the format's own error.
    pub fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut on_ignored = collect_ignored(&mut ignored);

        let config: Self = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_path_to_error::deserialize(serde_ignored::Deserializer::new(
                    deserializer,
                    &mut on_ignored,
                ))
                .map_err(|err| {
                    // toml reports syntax errors before visiting any field
                    if is_root(err.path()) {
                        ConfigError::Toml(err.into_inner())
                    } else {
                        let message = err.inner().message().to_string();
                        schema_error(err.path(), message)
                    }
                })?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config: Self = serde_path_to_error::deserialize(
                    serde_ignored::Deserializer::new(&mut deserializer, &mut on_ignored),
                )
                .map_err(|err| match err.inner().classify() {
                    serde_json::error::Category::Data => {
                        let message = err.inner().to_string();
                        schema_error(err.path(), message)
                    }
                    _ => ConfigError::Json(err.into_inner()),
                })?;
                deserializer.end()?;
                config
            }
        };
        drop(on_ignored);
        Ok((config, ignored))
    }

    /// Serialize back to the given format.
    pub fn to_string_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        Ok(match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }

    /// Run the schema validation pass.
    ///
    /// Collects every problem at once. Unknown fields are warnings, or
    /// errors with `options.strict`.
    pub fn validate(&self, unknown: &[String], options: LoadOptions) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        for field in unknown {
            if options.strict {
                diag.error_with_hint(
                    field,
                    "unknown field",
                    "check the spelling; keys are camelCase, e.g. showLinkIcon",
                );
            } else {
                diag.warn(field, "unknown field, ignored");
            }
        }

        self.docus.validate(&mut diag);
        diag
    }
}

/// Render an ignored-key path as `docus.footer.textLinks[0].colour`.
///
/// `Option` and newtype layers add no segment.
fn dotted_path(path: &serde_ignored::Path<'_>) -> String {
    use serde_ignored::Path;
    match path {
        Path::Root => String::new(),
        Path::Seq { parent, index } => format!("{}[{index}]", dotted_path(parent)),
        Path::Map { parent, key } => match dotted_path(parent) {
            prefix if prefix.is_empty() => key.clone(),
            prefix => format!("{prefix}.{key}"),
        },
        Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => dotted_path(parent),
    }
}

fn collect_ignored(ignored: &mut Vec<String>) -> impl FnMut(serde_ignored::Path<'_>) + '_ {
    move |path| ignored.push(dotted_path(&path))
}

fn is_root(path: &serde_path_to_error::Path) -> bool {
    path.iter().next().is_none()
}

/// Wrap a deserialization failure at `path` as a schema error.
fn schema_error(path: &serde_path_to_error::Path, message: String) -> ConfigError {
    let mut diag = ConfigDiagnostics::new();
    diag.error(path.to_string(), message);
    ConfigError::Schema(diag)
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse `[docus]` content and return the theme section.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[docus]\n{extra}");
    let (parsed, ignored) = AppConfig::parse_with_ignored(&config, ConfigFormat::Toml).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.docus
}

// ============================================================================
// tests
// ============================================================================
