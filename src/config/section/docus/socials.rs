//! `docus.socials`: social handles keyed by platform.

use crate::config::{ConfigDiagnostics, FieldPath, util::is_absolute_url};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Platform → handle map.
///
/// Keys are unique: a repeated platform is a parse error rather than a
/// silent overwrite. Iteration is in sorted key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Socials(BTreeMap<String, String>);

impl Socials {
    /// Handle for a platform, e.g. `socials.get("github")`.
    pub fn get(&self, platform: &str) -> Option<&str> {
        self.0.get(platform).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve every entry to a profile link.
    ///
    /// Handles that are already absolute URLs are kept verbatim; unknown
    /// platforms with a bare handle resolve to `url: None`.
    pub fn links(&self) -> Vec<SocialLink> {
        self.iter()
            .map(|(platform, handle)| SocialLink {
                platform: platform.to_string(),
                handle: handle.to_string(),
                url: profile_url(platform, handle),
            })
            .collect()
    }

    /// Validate handles.
    ///
    /// # Checks
    /// - handles are not blank (error)
    /// - unknown platforms need an absolute URL as handle (warning)
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        for (platform, handle) in self.iter() {
            let path = field.key(platform);
            if handle.trim().is_empty() {
                diag.error_with_hint(
                    &path,
                    "social handle is empty",
                    format!("set a handle or remove `{platform}`"),
                );
            } else if SocialPlatform::from_name(platform).is_none() && !is_absolute_url(handle) {
                diag.warn(
                    &path,
                    format!("unknown platform `{platform}`, use a full profile URL as handle"),
                );
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Socials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Socials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SocialsVisitor;

        impl<'de> Visitor<'de> for SocialsVisitor {
            type Value = Socials;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of platform = \"handle\" entries")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = BTreeMap::new();
                while let Some((platform, handle)) = access.next_entry::<String, String>()? {
                    if map.contains_key(&platform) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate social platform `{platform}`"
                        )));
                    }
                    map.insert(platform, handle);
                }
                Ok(Socials(map))
            }
        }

        deserializer.deserialize_map(SocialsVisitor)
    }
}

// ============================================================================
// Platforms
// ============================================================================

/// Platforms with a known profile URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Twitter,
    Github,
    Instagram,
    Facebook,
    Youtube,
    Medium,
    Linkedin,
    Discord,
}

impl SocialPlatform {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.to_ascii_lowercase().as_str() {
            "twitter" | "x" => Self::Twitter,
            "github" => Self::Github,
            "instagram" => Self::Instagram,
            "facebook" => Self::Facebook,
            "youtube" => Self::Youtube,
            "medium" => Self::Medium,
            "linkedin" => Self::Linkedin,
            "discord" => Self::Discord,
            _ => return None,
        })
    }

    /// Profile URL for a bare handle (a leading `@` is ignored).
    pub fn profile_url(self, handle: &str) -> String {
        let handle = handle.trim().trim_start_matches('@');
        match self {
            Self::Twitter => format!("https://twitter.com/{handle}"),
            Self::Github => format!("https://github.com/{handle}"),
            Self::Instagram => format!("https://www.instagram.com/{handle}"),
            Self::Facebook => format!("https://www.facebook.com/{handle}"),
            Self::Youtube => format!("https://www.youtube.com/@{handle}"),
            Self::Medium => format!("https://medium.com/@{handle}"),
            Self::Linkedin => format!("https://www.linkedin.com/in/{handle}"),
            Self::Discord => format!("https://discord.gg/{handle}"),
        }
    }
}

/// A social entry resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub handle: String,
    pub url: Option<String>,
}

fn profile_url(platform: &str, handle: &str) -> Option<String> {
    if is_absolute_url(handle) {
        return Some(handle.to_string());
    }
    SocialPlatform::from_name(platform).map(|p| p.profile_url(handle))
}
