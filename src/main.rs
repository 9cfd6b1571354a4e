//! docus - check, show and scaffold Docus site configuration.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use docus_config::{
    cli::{self, Cli, Commands},
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, preset, dry } => {
            cli::init::new_config(&cli, name.as_deref(), *preset, *dry)
        }
        Commands::Check { strict } => cli::check::check_config(&cli, *strict),
        Commands::Show {
            format,
            preset,
            socials,
        } => cli::show::show_config(&cli, *format, *preset, *socials),
    }
}
