//! Command implementations for the CLI.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use airing_types::Language;
use anyhow::{Context, Result, bail};
use tokio::io::BufReader;

use crate::advisor::Advisor;
use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;
use crate::format::{FormatOptions, format_poll_json};
use crate::shell::run_shell;

/// Poll once and print the result.
pub async fn cmd_check(
    config: &Config,
    language: Option<Language>,
    format: OutputFormat,
    output: Option<&PathBuf>,
    opts: &FormatOptions,
) -> Result<()> {
    let advisor = Advisor::from_config(config).with_language(language);
    warn_if_no_rooms(advisor.room_count());

    let result = advisor.poll().await;
    let content = match format {
        OutputFormat::Json => format_poll_json(&result, opts)?,
        OutputFormat::Text => advisor.render(&result, opts),
    };
    write_output(output, &content)
}

/// Run the interactive loop on stdin/stdout.
pub async fn cmd_shell(
    config: &Config,
    language: Option<Language>,
    opts: &FormatOptions,
) -> Result<()> {
    let advisor = Advisor::from_config(config).with_language(language);
    warn_if_no_rooms(advisor.room_count());

    // Piped output gets no escapes
    let opts = if io::stdout().is_terminal() {
        *opts
    } else {
        FormatOptions { no_color: true, ..*opts }
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    run_shell(&advisor, stdin, &mut stdout, &opts).await
}

/// Manage the configuration file.
pub fn cmd_config(action: ConfigAction, path: &Path, quiet: bool) -> Result<()> {
    match action {
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            let config = Config::load(path)?;
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{content}");
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {}\nUse --force to overwrite it.",
                    path.display()
                );
            }
            Config::default().save(path)?;
            if !quiet {
                eprintln!("Wrote default configuration to {}", path.display());
                eprintln!("Add your sensors under [outside] and [[rooms]].");
            }
        }
    }
    Ok(())
}

fn warn_if_no_rooms(count: usize) {
    if count == 0 {
        tracing::warn!("No rooms configured; add [[rooms]] entries to the config file");
    }
}

/// Write output to file or stdout
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}
