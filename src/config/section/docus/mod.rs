//! `[docus]` section configuration.
//!
//! Site metadata plus the layout toggles read by the theme.
//!
//! # Example
//!
//! ```toml
//! [docus]
//! title = "Teguh Sujatmiko"
//! description = "The best place to start your documentation."
//! image = "https://karamel.id/_nuxt/img/logo-karamel.d68322c.png"
//! layout = "default"
//! socials = { twitter = "tghsjtmk", github = "tghsjtmk" }
//!
//! [docus.aside]
//! level = 0
//! exclude = []
//!
//! [docus.header]
//! fluid = true
//! showLinkIcon = true
//!
//! [docus.main]
//! padded = true
//!
//! [docus.footer.credits]
//! icon = "IconDocus"
//! text = "Powered by Docus"
//! href = "https://docus.dev"
//!
//! [[docus.footer.textLinks]]
//! text = "Made with ❤️ Karamel.id"
//! href = "https://karamel.id"
//! target = "_blank"
//! ```
//!
//! Every field is optional. A missing field is left `None`: defaults belong
//! to the theme that consumes the config, never to this crate.

mod aside;
mod footer;
mod header;
mod main;
mod socials;

pub use aside::AsideConfig;
pub use footer::{Credits, FooterConfig, IconLink, TextLink};
pub use header::HeaderConfig;
pub use main::MainConfig;
pub use socials::{SocialLink, SocialPlatform, Socials};

use crate::config::{ConfigDiagnostics, util::check_image};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Docus theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "docus")]
pub struct SiteConfig {
    /// Site or author name.
    #[config(example = "My Docs")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Tagline used in page metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Logo / social preview image (absolute URL or site path).
    #[config(example = "https://example.com/logo.png")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Social handles keyed by platform.
    #[config(example = "{ github = \"octocat\", twitter = \"octocat\" }")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socials: Option<Socials>,

    /// Named page layout variant.
    #[config(example = "default")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    #[config(sub)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aside: Option<AsideConfig>,

    #[config(sub)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderConfig>,

    #[config(sub)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<MainConfig>,

    #[config(sub)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
}

impl SiteConfig {
    /// Validate metadata and every nested section.
    ///
    /// # Checks
    /// - `image` is an http(s) URL or absolute site path
    /// - `layout` is not blank
    /// - nested sections (see each section's `validate`)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            diag.warn(Self::FIELDS.title, "title is empty");
        }

        if let Some(image) = &self.image
            && let Some(problem) = check_image(image)
        {
            diag.error_with_hint(
                Self::FIELDS.image,
                problem,
                "use an absolute URL like https://example.com/logo.png or a path like /logo.png",
            );
        }

        if let Some(layout) = &self.layout
            && layout.trim().is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.layout,
                "layout name is empty",
                "remove the field to use the theme's default layout",
            );
        }

        if let Some(socials) = &self.socials {
            socials.validate(Self::FIELDS.socials, diag);
        }
        if let Some(aside) = &self.aside {
            aside.validate(diag);
        }
        if let Some(header) = &self.header {
            header.validate(diag);
        }
        if let Some(footer) = &self.footer {
            footer.validate(diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_metadata_fields() {
        let config = test_parse_config(
            r#"
title = "Teguh Sujatmiko"
description = "The best place to start your documentation."
image = "https://karamel.id/_nuxt/img/logo-karamel.d68322c.png"
layout = "default"
"#,
        );
        assert_eq!(config.title.as_deref(), Some("Teguh Sujatmiko"));
        assert_eq!(
            config.description.as_deref(),
            Some("The best place to start your documentation.")
        );
        assert_eq!(config.layout.as_deref(), Some("default"));
        assert!(config.aside.is_none());
        assert!(config.footer.is_none());
    }

    #[test]
    fn test_invalid_image_reported() {
        let config = test_parse_config(r#"image = "logo.png""#);
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_at("docus.image"));
    }

    #[test]
    fn test_blank_layout_reported() {
        let config = test_parse_config(r#"layout = "  ""#);
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_at("docus.layout"));
    }

    #[test]
    fn test_field_paths_use_wire_names() {
        assert_eq!(SiteConfig::FIELDS.title.as_str(), "docus.title");
        assert_eq!(HeaderConfig::FIELDS.show_link_icon.as_str(), "docus.header.showLinkIcon");
        assert_eq!(FooterConfig::FIELDS.text_links.as_str(), "docus.footer.textLinks");
        assert_eq!(TextLink::FIELDS.href.as_str(), "docus.footer.textLinks.href");
    }

    #[test]
    fn test_template_lists_sections() {
        let template = SiteConfig::template_with_header();
        assert!(template.starts_with("# Docus theme configuration."));
        assert!(template.contains("[docus]\n"));
        assert!(template.contains("# title = \"My Docs\""));
        assert!(template.contains("[docus.aside]"));
        assert!(template.contains("# showLinkIcon = false"));
        assert!(template.contains("[docus.footer.credits]"));
        assert!(template.contains("# [[docus.footer.textLinks]]"));
        assert!(template.contains("# [[docus.footer.iconLinks]]"));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let config = SiteConfig {
            title: Some("Docs".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"title":"Docs"}"#);
    }
}
