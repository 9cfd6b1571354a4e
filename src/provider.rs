//! Site configuration provider.
//!
//! A provider is built once at startup from a config literal. Construction
//! parses and validates; afterwards the config is immutable and shared by
//! `Arc`, so any number of readers can hold it without coordination.
//!
//! ```ignore
//! let provider = ConfigProvider::from_path(Path::new("docus.toml"), LoadOptions::default())?;
//! render(&provider.provide());
//! ```

use crate::config::{
    AppConfig, ConfigDiagnostic, ConfigError, ConfigFormat, LoadOptions, SiteConfig,
};
use crate::debug;
use crate::embed::Preset;
use std::{path::Path, sync::Arc};

/// Holds one validated [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    config: Arc<SiteConfig>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigProvider {
    /// Validate an already-built config.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        Self::validated(AppConfig { docus: config }, &[], LoadOptions::default())
    }

    /// Parse and validate a config literal.
    pub fn from_literal(
        content: &str,
        format: ConfigFormat,
        options: LoadOptions,
    ) -> Result<Self, ConfigError> {
        let (app, unknown) = AppConfig::parse_with_ignored(content, format)?;
        Self::validated(app, &unknown, options)
    }

    /// Read, parse and validate a config file.
    pub fn from_path(path: &Path, options: LoadOptions) -> Result<Self, ConfigError> {
        let (app, unknown) = AppConfig::from_path(path)?;
        let provider = Self::validated(app, &unknown, options)?;
        debug!("load"; "loaded {}", path.display());
        Ok(provider)
    }

    /// Load one of the bundled literals.
    pub fn from_preset(preset: Preset) -> Result<Self, ConfigError> {
        Self::from_literal(preset.source(), ConfigFormat::Toml, LoadOptions { strict: true })
    }

    fn validated(
        app: AppConfig,
        unknown: &[String],
        options: LoadOptions,
    ) -> Result<Self, ConfigError> {
        let warnings = app
            .validate(unknown, options)
            .into_result()
            .map_err(ConfigError::Schema)?;
        Ok(Self {
            config: Arc::new(app.docus),
            warnings,
        })
    }

    /// The configuration, whole. Every call returns the same shared value.
    #[inline]
    pub fn provide(&self) -> Arc<SiteConfig> {
        Arc::clone(&self.config)
    }

    /// Borrow the configuration without touching the reference count.
    #[inline]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Non-fatal findings from the validation pass.
    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }
}
