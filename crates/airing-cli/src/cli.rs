//! CLI argument definitions using clap.

use std::path::PathBuf;

use airing_types::Language;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "airing")]
#[command(author, version, about = "Airing advisor for networked humidity sensors", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "AIRING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Display language (en, lu), overrides the config file
    #[arg(long, global = true, value_parser = parse_language)]
    pub language: Option<Language>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive mode: 'r' refresh, 's' summer mode, 'e' exit (default)
    Shell,

    /// Poll all sensors once and print the result
    Check {
        /// Also show the summer (temperature) recommendations
        #[arg(short, long)]
        summer: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output compact JSON (no pretty-printing)
        #[arg(long)]
        compact: bool,

        /// Write output to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show configuration file path
    Path,

    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["airing"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_check_arguments() {
        let cli = Cli::try_parse_from(["airing", "check", "--summer", "--format", "json"]).unwrap();
        match cli.command {
            Some(Commands::Check {
                summer,
                format,
                compact,
                output,
            }) => {
                assert!(summer);
                assert_eq!(format, OutputFormat::Json);
                assert!(!compact);
                assert!(output.is_none());
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_global_language_flag() {
        let cli = Cli::try_parse_from(["airing", "check", "--language", "lu"]).unwrap();
        assert_eq!(cli.language, Some(Language::Luxembourgish));

        assert!(Cli::try_parse_from(["airing", "--language", "fr"]).is_err());
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["airing", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init { force: true }
            })
        ));
    }
}
