//! `[docus.aside]` configuration for the navigation sidebar.

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Navigation sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "docus.aside")]
pub struct AsideConfig {
    /// Depth of the navigation tree shown in the sidebar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,

    /// Path patterns where the sidebar is hidden, in order.
    #[config(example = "[\"/blog\"]")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl AsideConfig {
    /// Sidebar depth, once validated as non-negative.
    pub fn depth(&self) -> Option<u32> {
        self.level.and_then(|level| u32::try_from(level).ok())
    }

    /// Validate sidebar settings.
    ///
    /// # Checks
    /// - `level` is not negative
    /// - `exclude` entries are not blank
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(level) = self.level
            && level < 0
        {
            diag.error_with_hint(
                Self::FIELDS.level,
                format!("level must not be negative, got {level}"),
                "use 0 for the top-level tree only",
            );
        } else if self.level.is_some() && self.depth().is_none() {
            diag.error(Self::FIELDS.level, "level is too large");
        }

        if let Some(exclude) = &self.exclude {
            validate_patterns(Self::FIELDS.exclude, exclude, diag);
        }
    }
}

/// Shared check for `exclude` lists: entries must not be blank.
pub(super) fn validate_patterns(field: FieldPath, patterns: &[String], diag: &mut ConfigDiagnostics) {
    for (i, pattern) in patterns.iter().enumerate() {
        if pattern.trim().is_empty() {
            diag.error(field.item(i), "exclude pattern is empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_zero_level_and_empty_exclude_kept() {
        let config = test_parse_config("[docus.aside]\nlevel = 0\nexclude = []");
        let aside = config.aside.unwrap();
        assert_eq!(aside.level, Some(0));
        assert_eq!(aside.exclude, Some(Vec::new()));
        assert_eq!(aside.depth(), Some(0));
    }

    #[test]
    fn test_negative_level_is_error() {
        let config = test_parse_config("[docus.aside]\nlevel = -1");
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_at("docus.aside.level"));
        assert_eq!(config.aside.unwrap().depth(), None);
    }

    #[test]
    fn test_exclude_keeps_order() {
        let config = test_parse_config("[docus.aside]\nexclude = [\"/c\", \"/a\", \"/b\"]");
        assert_eq!(
            config.aside.unwrap().exclude.unwrap(),
            vec!["/c".to_string(), "/a".to_string(), "/b".to_string()]
        );
    }

    #[test]
    fn test_blank_exclude_pattern() {
        let config = test_parse_config("[docus.aside]\nexclude = [\"/ok\", \"\"]");
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.has_error_at("docus.aside.exclude[1]"));
    }
}
