//! Configuration error types.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("Config serialization error")]
    Serialize(#[from] toml::ser::Error),

    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Schema(SchemaValidationError),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "docus.footer.textLinks[0].href")
    pub field: String,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: impl AsRef<str>, message: impl Into<String>) -> Self {
        Self {
            field: field.as_ref().to_string(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(f, "{}{}{}", "[".dimmed(), self.field.cyan(), "]".dimmed())?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Errors and warnings collected by one validation pass.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Non-fatal findings (unknown fields, unrecognized platforms).
    warnings: Vec<ConfigDiagnostic>,
}

/// Schema violation reported for a config literal.
///
/// Carries every offending field path found by the validation pass.
pub type SchemaValidationError = ConfigDiagnostics;

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: impl AsRef<str>, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: impl AsRef<str>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: impl AsRef<str>, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Whether any error is reported for exactly `field`.
    pub fn has_error_at(&self, field: impl AsRef<str>) -> bool {
        let field = field.as_ref();
        self.errors.iter().any(|e| e.field == field)
    }

    /// Split into the warning list, or fail with the whole report.
    pub fn into_result(self) -> Result<Vec<ConfigDiagnostic>, Self> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldPath;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docus.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docus.toml"));

        let preset_err = ConfigError::UnknownPreset("nope".to_string());
        assert!(format!("{preset_err}").contains("nope"));
    }

    #[test]
    fn test_diagnostics_display_lists_every_field() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("docus.aside.level"), "must not be negative");
        diag.error_with_hint(
            "docus.footer.textLinks[0].href",
            "invalid URL",
            "use format like https://example.com",
        );

        let display = format!("{}", ConfigError::Schema(diag));
        assert!(display.contains("docus.aside.level"));
        assert!(display.contains("docus.footer.textLinks[0].href"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_into_result_keeps_warnings() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn("docus.socials.myspace", "unknown platform");
        let warnings = diag.into_result().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "docus.socials.myspace");
    }

    #[test]
    fn test_into_result_fails_on_error() {
        let mut diag = ConfigDiagnostics::new();
        diag.error("docus.image", "invalid URL");
        let err = diag.into_result().unwrap_err();
        assert!(err.has_error_at("docus.image"));
        assert_eq!(err.len(), 1);
    }
}
