//! Interactive refresh / summer / exit loop.

use std::io::Write;

use airing_core::SensorLink;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::advisor::Advisor;
use crate::format::FormatOptions;
use crate::style;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Poll and show the humidity report
    Refresh,
    /// Poll and show the humidity and summer reports
    Summer,
    /// Leave the loop
    Exit,
}

impl ShellCommand {
    /// Parse one input line; unknown input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "r" => Some(ShellCommand::Refresh),
            "s" => Some(ShellCommand::Summer),
            "e" => Some(ShellCommand::Exit),
            _ => None,
        }
    }
}

/// Run the prompt loop until `e` or end of input.
pub async fn run_shell<L, R, W>(
    advisor: &Advisor<L>,
    input: R,
    out: &mut W,
    opts: &FormatOptions,
) -> Result<()>
where
    L: SensorLink,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let prompt = advisor.report().prompt();
    let mut lines = input.lines();

    loop {
        write!(out, "\n\n{}\n{}", style::separator(prompt), prompt)?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            writeln!(out)?;
            break;
        };

        let summer = match ShellCommand::parse(&line) {
            Some(ShellCommand::Exit) => break,
            Some(ShellCommand::Refresh) => false,
            Some(ShellCommand::Summer) => true,
            None => continue,
        };

        let result = advisor.poll().await;
        let text = advisor.render(&result, &opts.with_summer(summer));
        out.write_all(text.as_bytes())?;
    }

    Ok(())
}
