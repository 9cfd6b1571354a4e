//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "docus.aside")]
/// pub struct AsideConfig {
///     pub level: Option<i64>,
/// }
///
/// // Generated:
/// impl AsideConfig {
///     pub const FIELDS: AsideConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(AsideConfig::FIELDS.level, "must not be negative");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Path of this field inside the `index`-th entry of an array section.
    ///
    /// `docus.footer.textLinks.href` at 1 -> `docus.footer.textLinks[1].href`
    pub fn at(&self, index: usize) -> String {
        match self.0.rsplit_once('.') {
            Some((section, key)) => format!("{section}[{index}].{key}"),
            None => format!("{}[{index}]", self.0),
        }
    }

    /// Path of the `index`-th element of a sequence field.
    ///
    /// `docus.aside.exclude` at 0 -> `docus.aside.exclude[0]`
    pub fn item(&self, index: usize) -> String {
        format!("{}[{index}]", self.0)
    }

    /// Path of a map entry under this field.
    ///
    /// `docus.socials` with `github` -> `docus.socials.github`
    pub fn key(&self, key: &str) -> String {
        format!("{}.{key}", self.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_inserts_index_before_key() {
        let path = FieldPath::new("docus.footer.textLinks.href");
        assert_eq!(path.at(1), "docus.footer.textLinks[1].href");
    }

    #[test]
    fn test_item_and_key() {
        let path = FieldPath::new("docus.aside.exclude");
        assert_eq!(path.item(0), "docus.aside.exclude[0]");

        let path = FieldPath::new("docus.socials");
        assert_eq!(path.key("github"), "docus.socials.github");
    }

    #[test]
    fn test_at_without_section() {
        assert_eq!(FieldPath::new("links").at(2), "links[2]");
    }
}
