//! Typed site configuration for Docus-style documentation themes.
//!
//! The configuration is plain data: site metadata, layout toggles and footer
//! links. This crate parses it (`docus.toml` or JSON), validates it once,
//! and hands out an immutable [`SiteConfig`] through a [`ConfigProvider`].
//!
//! ```ignore
//! use docus_config::{ConfigProvider, Preset};
//!
//! let provider = ConfigProvider::from_preset(Preset::Karamel)?;
//! let config = provider.provide();
//! assert_eq!(config.title.as_deref(), Some("Teguh Sujatmiko"));
//! ```

pub mod cli;
pub mod config;
pub mod embed;
pub mod logger;
mod provider;

pub use config::{
    AppConfig, ConfigDiagnostics, ConfigError, ConfigFormat, LoadOptions, SchemaValidationError,
    SiteConfig,
};
pub use embed::Preset;
pub use provider::ConfigProvider;
