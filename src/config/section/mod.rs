//! Configuration section definitions.
//!
//! Each module corresponds to a table in `docus.toml`:
//!
//! | Module  | TOML Section   | Purpose                                  |
//! |---------|----------------|------------------------------------------|
//! | `docus` | `[docus]`      | Site metadata, layout toggles, footer    |

pub mod docus;

pub use docus::{
    AsideConfig, Credits, FooterConfig, HeaderConfig, IconLink, MainConfig, SiteConfig,
    SocialLink, SocialPlatform, Socials, TextLink,
};
