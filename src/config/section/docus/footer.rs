//! `[docus.footer]` configuration: credits and link lists.

use crate::config::{ConfigDiagnostics, FieldPath, util::check_href};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Named browsing contexts accepted for `target`.
const TARGET_KEYWORDS: &[&str] = &["_blank", "_self", "_parent", "_top"];

/// Page footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "docus.footer")]
pub struct FooterConfig {
    /// Stretch the footer to the full viewport width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid: Option<bool>,

    #[config(sub)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,

    #[config(sub)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_links: Option<Vec<TextLink>>,

    #[config(sub)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_links: Option<Vec<IconLink>>,
}

impl FooterConfig {
    /// Text links in declaration order (empty when absent).
    pub fn text_links(&self) -> &[TextLink] {
        self.text_links.as_deref().unwrap_or_default()
    }

    /// Icon links in declaration order (empty when absent).
    pub fn icon_links(&self) -> &[IconLink] {
        self.icon_links.as_deref().unwrap_or_default()
    }

    /// Validate credits and every link entry.
    ///
    /// Link errors are reported per entry, e.g. `docus.footer.textLinks[2].href`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(credits) = &self.credits {
            validate_href(Credits::FIELDS.href.as_str(), &credits.href, diag);
            if credits.text.trim().is_empty() {
                diag.error(Credits::FIELDS.text, "credits text is empty");
            }
        }

        for (i, link) in self.text_links().iter().enumerate() {
            validate_href(&TextLink::FIELDS.href.at(i), &link.href, diag);
            if link.text.trim().is_empty() {
                diag.error(TextLink::FIELDS.text.at(i), "link text is empty");
            }
            if let Some(target) = &link.target {
                validate_target(TextLink::FIELDS.target, i, target, diag);
            }
        }

        for (i, link) in self.icon_links().iter().enumerate() {
            validate_href(&IconLink::FIELDS.href.at(i), &link.href, diag);
            if link.icon.trim().is_empty() {
                diag.error(IconLink::FIELDS.icon.at(i), "icon name is empty");
            }
        }
    }
}

fn validate_href(field: &str, href: &str, diag: &mut ConfigDiagnostics) {
    if let Some(problem) = check_href(href) {
        diag.error_with_hint(
            field,
            problem,
            "use an absolute URL like https://example.com or a path like /guide",
        );
    }
}

fn validate_target(field: FieldPath, index: usize, target: &str, diag: &mut ConfigDiagnostics) {
    if target.trim().is_empty() {
        diag.error(field.at(index), "target is empty");
    } else if target.starts_with('_') && !TARGET_KEYWORDS.contains(&target) {
        diag.error_with_hint(
            field.at(index),
            format!("unknown target keyword `{target}`"),
            format!("use one of {}", TARGET_KEYWORDS.join(", ")),
        );
    }
}

// ============================================================================
// Entries
// ============================================================================

/// Footer credit line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "docus.footer.credits", commented)]
pub struct Credits {
    /// Icon component name.
    #[config(example = "IconDocus")]
    pub icon: String,

    #[config(example = "Powered by Docus")]
    pub text: String,

    #[config(example = "https://docus.dev")]
    pub href: String,
}

/// Text link rendered in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "docus.footer.textLinks", array, commented)]
pub struct TextLink {
    #[config(example = "Made with Docus")]
    pub text: String,

    #[config(example = "https://docus.dev")]
    pub href: String,

    /// Browsing context, e.g. `_blank`.
    #[config(example = "_blank")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Icon link rendered in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "docus.footer.iconLinks", array, commented)]
pub struct IconLink {
    #[config(example = "https://github.com/nuxt-themes/docus")]
    pub href: String,

    /// Icon component name.
    #[config(example = "simple-icons:github")]
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const FOOTER: &str = r#"
[docus.footer]
fluid = true

[docus.footer.credits]
icon = "IconDocus"
text = "Powered by Docus"
href = "https://docus.dev"

[[docus.footer.textLinks]]
text = "First"
href = "https://karamel.id"
target = "_blank"

[[docus.footer.textLinks]]
text = "Second"
href = "/about"
"#;

    #[test]
    fn test_footer_parses_in_order() {
        let config = test_parse_config(FOOTER);
        let footer = config.footer.unwrap();
        assert_eq!(footer.fluid, Some(true));
        assert_eq!(footer.credits.as_ref().unwrap().icon, "IconDocus");

        let texts: Vec<_> = footer.text_links().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["First", "Second"]);
        assert_eq!(footer.text_links()[0].target.as_deref(), Some("_blank"));
        assert_eq!(footer.text_links()[1].target, None);

        let mut diag = ConfigDiagnostics::new();
        footer.validate(&mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_missing_icon_links_is_absent() {
        let config = test_parse_config(FOOTER);
        let footer = config.footer.unwrap();
        assert!(footer.icon_links.is_none());
        assert!(footer.icon_links().is_empty());
    }

    #[test]
    fn test_invalid_href_reported_with_index() {
        let config = test_parse_config(
            r#"
[[docus.footer.textLinks]]
text = "ok"
href = "https://ok.example"

[[docus.footer.textLinks]]
text = "bad"
href = "karamel.id"

[[docus.footer.iconLinks]]
href = "ftp://files.example"
icon = "IconFtp"

[[docus.footer.iconLinks]]
href = "javascript:void(0)"
icon = "IconBad"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.has_error_at("docus.footer.textLinks[1].href"));
        assert!(diag.has_error_at("docus.footer.iconLinks[1].href"));
    }

    #[test]
    fn test_non_web_schemes_accepted() {
        let config = test_parse_config(
            r#"
[[docus.footer.iconLinks]]
href = "ftp://files.example.com/a"
icon = "IconFtp"

[[docus.footer.iconLinks]]
href = "tel:+15551234"
icon = "IconPhone"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_credits_href_checked() {
        let config = test_parse_config(
            "[docus.footer.credits]\nicon = \"IconDocus\"\ntext = \"Docus\"\nhref = \"docus.dev\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_at("docus.footer.credits.href"));
    }

    #[test]
    fn test_unknown_target_keyword() {
        let config = test_parse_config(
            "[[docus.footer.textLinks]]\ntext = \"x\"\nhref = \"/x\"\ntarget = \"_new\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_at("docus.footer.textLinks[0].target"));
    }

    #[test]
    fn test_named_target_allowed() {
        let config = test_parse_config(
            "[[docus.footer.textLinks]]\ntext = \"x\"\nhref = \"/x\"\ntarget = \"docs-window\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_link_missing_href_fails_to_parse() {
        let content = "[docus]\n[[docus.footer.textLinks]]\ntext = \"x\"";
        assert!(crate::config::AppConfig::from_str(content).is_err());
    }
}
