//! `[docus.main]` configuration for the page content area.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Page content area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "docus.main")]
pub struct MainConfig {
    /// Stretch content to the full viewport width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluid: Option<bool>,

    /// Add horizontal padding around content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padded: Option<bool>,
}
