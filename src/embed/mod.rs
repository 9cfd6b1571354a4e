//! Embedded config literals.
//!
//! Each preset is a complete `docus.toml` compiled into the binary. Presets
//! are independent deployments: loading one never affects another, and
//! neither takes precedence.
//!
//! # Usage
//!
//! ```ignore
//! use embed::Preset;
//!
//! let provider = ConfigProvider::from_preset(Preset::Handbook)?;
//! ```

use crate::config::ConfigError;
use std::str::FromStr;

/// Bundled configuration literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Preset {
    /// Personal documentation site.
    Karamel,
    /// Team handbook with icon links.
    Handbook,
}

impl Preset {
    pub const ALL: &'static [Preset] = &[Self::Karamel, Self::Handbook];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Karamel => "karamel",
            Self::Handbook => "handbook",
        }
    }

    /// TOML source of the preset.
    pub const fn source(self) -> &'static str {
        match self {
            Self::Karamel => include_str!("presets/karamel.toml"),
            Self::Handbook => include_str!("presets/handbook.toml"),
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ConfigFormat};

    #[test]
    fn test_presets_parse_without_unknown_fields() {
        for preset in Preset::ALL {
            let (_, ignored) =
                AppConfig::parse_with_ignored(preset.source(), ConfigFormat::Toml).unwrap();
            assert!(ignored.is_empty(), "{}: {:?}", preset.name(), ignored);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("karamel".parse::<Preset>().unwrap(), Preset::Karamel);
        assert_eq!("Handbook".parse::<Preset>().unwrap(), Preset::Handbook);
        assert!(matches!(
            "other".parse::<Preset>(),
            Err(ConfigError::UnknownPreset(name)) if name == "other"
        ));
    }
}
