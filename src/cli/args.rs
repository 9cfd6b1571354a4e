//! Command-line interface definitions.

use crate::{config::ConfigFormat, embed::Preset};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Docus site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "docus", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: docus.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "docus.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a new config file
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Start from a bundled config instead of the commented template
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown fields as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the config as the theme receives it
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigFormat,

        /// Show a bundled config instead of the config file
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,

        /// Print resolved social profile links instead of the config
        #[arg(long)]
        socials: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_strict() {
        let cli = Cli::try_parse_from(["docus", "check", "--strict"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { strict: true }));
        assert_eq!(cli.config, PathBuf::from("docus.toml"));
    }

    #[test]
    fn test_parse_show_preset_json() {
        let cli =
            Cli::try_parse_from(["docus", "show", "--preset", "handbook", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Show {
                format, preset, ..
            } => {
                assert_eq!(format, ConfigFormat::Json);
                assert_eq!(preset, Some(Preset::Handbook));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_init_with_name() {
        let cli = Cli::try_parse_from(["docus", "-C", "site.toml", "init", "docs"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { name: Some(_), .. }));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(Cli::try_parse_from(["docus", "show", "--preset", "nope"]).is_err());
    }
}
