//! Proc macros for docus-config.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[serde(rename_all = "camelCase")]
//! #[config(section = "docus.header")]
//! /// Top navigation bar.
//! pub struct HeaderConfig {
//!     /// Stretch the header to the full viewport width.
//!     pub fluid: Option<bool>,
//!
//!     /// Show an external-link icon next to outbound links.
//!     pub show_link_icon: Option<bool>,
//!
//!     /// Paths where the header is hidden.
//!     #[config(example = "[\"/blog\"]")]
//!     pub exclude: Option<Vec<String>>,
//! }
//!
//! // Generates:
//! // - HeaderConfig::FIELDS.show_link_icon -> FieldPath("docus.header.showLinkIcon")
//! // - HeaderConfig::template() -> TOML key lines, commented out
//! // - HeaderConfig::template_with_header() -> with [docus.header] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//! - `#[config(array)]` - section is an array of tables (`[[path]]`)
//! - `#[config(commented)]` - comment out the section header in templates
//! - `#[serde(rename_all = "camelCase")]` - honored for key names
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(sub)]` - Nested section, rendered with its own header
//! - `#[config(name = "x")]` - Custom key name (wins over serde rename)
//! - `#[config(example = "x")]` - Example value shown in the template
//! - `#[serde(rename = "x")]` - honored for key names
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `FooterConfig` → `footer`
//! - `TextLink` → `text_link`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
