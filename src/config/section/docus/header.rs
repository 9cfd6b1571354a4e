//! `[docus.header]` configuration.

use super::aside::validate_patterns;
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Top navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "docus.header")]
pub struct HeaderConfig {
    /// Stretch the header to the full viewport width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid: Option<bool>,

    /// Text shown next to the logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Show the site logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<bool>,

    /// Show an external-link icon next to outbound links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_link_icon: Option<bool>,

    /// Path patterns excluded from the header navigation, in order.
    #[config(example = "[\"/blog\"]")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl HeaderConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(exclude) = &self.exclude {
            validate_patterns(Self::FIELDS.exclude, exclude, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_camel_case_keys() {
        let config = test_parse_config(
            r#"
[docus.header]
fluid = true
title = "Teguh Sujatmiko"
showLinkIcon = true
exclude = []
"#,
        );
        let header = config.header.unwrap();
        assert_eq!(header.fluid, Some(true));
        assert_eq!(header.title.as_deref(), Some("Teguh Sujatmiko"));
        assert_eq!(header.show_link_icon, Some(true));
        assert_eq!(header.logo, None);
        assert_eq!(header.exclude, Some(Vec::new()));
    }

    #[test]
    fn test_snake_case_key_is_unknown() {
        let content = "[docus.header]\nshow_link_icon = true";
        let (config, ignored) =
            crate::config::AppConfig::parse_with_ignored(content, crate::config::ConfigFormat::Toml)
                .unwrap();
        assert_eq!(config.docus.header.unwrap().show_link_icon, None);
        assert_eq!(ignored, vec!["docus.header.show_link_icon".to_string()]);
    }
}
