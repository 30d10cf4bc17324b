//! Command-line airing advisor.
//!
//! Polls an outside sensor and a list of room sensors, then tells per room
//! whether opening the windows helps against humidity (or, in summer mode,
//! against heat).
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `shell` | Interactive loop: `r` refresh, `s` summer mode, `e` exit (default) |
//! | `check` | Poll once and print text or JSON |
//! | `config` | Show, locate or initialize the configuration file |
//! | `completions` | Generate shell completions |
//!
//! # Environment Variables
//!
//! - `AIRING_CONFIG`: Configuration file (overridden by `--config`)
//! - `NO_COLOR`: Disable colored output when set
//! - `RUST_LOG`: Log filter when neither `--verbose` nor `--quiet` is given

mod advisor;
mod cli;
mod commands;
mod config;
mod format;
mod shell;
mod style;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{cmd_check, cmd_config, cmd_shell};
use crate::config::Config;
use crate::format::FormatOptions;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "airing", &mut io::stdout());
        return Ok(());
    }

    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config_path = Config::resolve_path(cli.config.as_deref());
    let opts = FormatOptions::new(cli.no_color);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let config = Config::load(&config_path)?;
            cmd_shell(&config, cli.language, &opts).await?;
        }
        Commands::Check {
            summer,
            format,
            compact,
            output,
        } => {
            let config = Config::load(&config_path)?;
            let opts = opts.with_summer(summer).with_compact(compact);
            cmd_check(&config, cli.language, format, output.as_ref(), &opts).await?;
        }
        Commands::Config { action } => {
            cmd_config(action, &config_path, cli.quiet)?;
        }
        Commands::Completions { .. } => {
            // Already handled above
            unreachable!()
        }
    }

    Ok(())
}
