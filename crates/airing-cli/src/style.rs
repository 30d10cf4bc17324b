//! Visual styling utilities for the CLI.
//!
//! Colors follow the traffic-light reading of the report:
//! - red: the room should be aired
//! - green: nothing to do
//! - orange: airing would not help (more humid or warmer outside)
//! - blue: cooler outside in summer mode
//! - pale pink: communication errors

use airing_types::{AirDecision, SummerDecision};
use owo_colors::OwoColorize;

/// Semantic color of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Communication errors (pale pink)
    Problem,
    /// Action advised (red)
    Alert,
    /// Nothing to do (green)
    Good,
    /// Airing would not help (orange)
    Caution,
    /// Cooler outside (blue)
    Cool,
}

impl Tone {
    /// Tone for a humidity-mode decision.
    pub fn for_decision(decision: AirDecision) -> Self {
        match decision {
            AirDecision::Ventilate => Tone::Alert,
            AirDecision::NoNeedToVentilate => Tone::Good,
            AirDecision::MoreHumidOutside => Tone::Caution,
        }
    }

    /// Tone for a summer-mode decision.
    pub fn for_summer(decision: SummerDecision) -> Self {
        match decision {
            SummerDecision::VentilateCooler => Tone::Cool,
            SummerDecision::StayClosedWarmer => Tone::Caution,
        }
    }

    /// Tone for a relative humidity reading.
    pub fn for_humidity(humidity_ok: bool) -> Self {
        if humidity_ok { Tone::Good } else { Tone::Alert }
    }
}

/// Color `text` with the given tone.
pub fn paint(text: &str, tone: Tone, no_color: bool) -> String {
    if no_color {
        return text.to_string();
    }

    match tone {
        // xterm 217
        Tone::Problem => format!("{}", text.truecolor(255, 175, 175)),
        Tone::Alert => format!("{}", text.red()),
        Tone::Good => format!("{}", text.bright_green()),
        // xterm 208
        Tone::Caution => format!("{}", text.truecolor(255, 135, 0)),
        Tone::Cool => format!("{}", text.bright_blue()),
    }
}

/// Underline a heading.
pub fn heading(text: &str, no_color: bool) -> String {
    if no_color {
        text.to_string()
    } else {
        format!("{}", text.underline())
    }
}

/// Separator printed before each prompt, as wide as the prompt text.
pub fn separator(prompt: &str) -> String {
    "-".repeat(prompt.trim_end().chars().count())
}
