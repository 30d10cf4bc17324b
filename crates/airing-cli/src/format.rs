//! Output formatting utilities for text and JSON output.

use airing_core::ReportAssembler;
use airing_types::{PollResult, RoomEvaluation};
use anyhow::Result;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::style::{self, Tone};

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Append the summer-mode section.
    pub summer: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            ..Self::default()
        }
    }

    /// Create with summer section option.
    pub fn with_summer(mut self, summer: bool) -> Self {
        self.summer = summer;
        self
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        style::paint(text, tone, self.no_color)
    }
}

/// Poll time as shown next to headings and errors (`HH:MM`).
pub fn format_clock(at: OffsetDateTime) -> String {
    at.format(format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "--:--".to_string())
}

/// Render one poll result as text.
///
/// Errors come first, prefixed with the poll time. The humidity report is
/// only shown when the outside sensor and at least one room answered.
pub fn format_poll_text(
    result: &PollResult,
    report: &ReportAssembler,
    min_relative_diff_pct: f64,
    opts: &FormatOptions,
) -> String {
    let clock = format_clock(result.polled_at);
    let mut out = String::new();

    if result.has_errors() {
        out.push_str(&opts.paint(&format!("({clock})"), Tone::Problem));
        out.push('\n');
        for error in &result.errors {
            out.push_str(&opts.paint(error, Tone::Problem));
            out.push('\n');
        }
    }

    let Some(outside) = result.outside else {
        return out;
    };
    if result.rooms.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str(&format!(
        "{} ({clock})\n",
        style::heading(report.humidity_heading(), opts.no_color)
    ));
    out.push_str(&format!(
        "outside: temp: {:.1} °C, relhum: {:.1} %, abshum: {:.2} g/m3\n",
        outside.temperature_c, outside.relative_humidity_pct, outside.absolute_humidity
    ));

    for room in &result.rooms {
        out.push_str(&format_room_line(room, report, opts));
        out.push('\n');
    }

    if result.any_more_humid_outside() {
        out.push_str(&format!(
            "{}{}\n",
            opts.paint(" * ", Tone::Caution),
            report.more_humid_note(min_relative_diff_pct)
        ));
    }

    if opts.summer {
        out.push('\n');
        out.push_str(&format!(
            "{} ({clock})\n",
            style::heading(report.summer_heading(), opts.no_color)
        ));
        for room in &result.rooms {
            out.push_str(&format_summer_line(room, report, opts));
            out.push('\n');
        }
    }

    out
}

/// One humidity-mode line for a room.
pub fn format_room_line(room: &RoomEvaluation, report: &ReportAssembler, opts: &FormatOptions) -> String {
    let tone = Tone::for_decision(room.decision);
    let rel_humidity = opts.paint(
        &format!("{:.1} %", room.reading.relative_humidity_pct),
        Tone::for_humidity(room.humidity_ok),
    );

    format!(
        "{}: {:.1} °C, {}, abshum: {:.2}, abshumdiff {}: {:.2} - {} -",
        opts.paint(&room.room.name, tone),
        room.reading.temperature_c,
        rel_humidity,
        room.reading.absolute_humidity,
        report.to_outside(),
        room.abs_humidity_diff_outside,
        opts.paint(report.decision_label(room.decision), tone),
    )
}

/// One summer-mode line for a room.
pub fn format_summer_line(room: &RoomEvaluation, report: &ReportAssembler, opts: &FormatOptions) -> String {
    let tone = Tone::for_summer(room.summer);

    format!(
        "{}: {:.1} °C, tempdiff {}: {:.2} - {} -",
        opts.paint(&room.room.name, tone),
        room.reading.temperature_c,
        report.to_outside(),
        room.temperature_diff_outside,
        opts.paint(report.summer_label(room.summer), tone),
    )
}

/// Render one poll result as JSON.
pub fn format_poll_json(result: &PollResult, opts: &FormatOptions) -> Result<String> {
    opts.as_json(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airing_core::{Thresholds, derive, evaluate_room};
    use airing_types::{Language, Reading, SensorEndpoint};
    use time::macros::datetime;

    fn sample_result() -> PollResult {
        let thresholds = Thresholds::default();
        let outside = derive(Reading {
            temperature_c: 10.0,
            relative_humidity_pct: 80.0,
        });
        let office = derive(Reading {
            temperature_c: 20.0,
            relative_humidity_pct: 85.0,
        });
        let cellar = derive(Reading {
            temperature_c: 9.0,
            relative_humidity_pct: 75.0,
        });

        let mut result = PollResult::empty(datetime!(2026-01-14 07:05 UTC));
        result.outside = Some(outside);
        result.rooms = vec![
            evaluate_room(
                &SensorEndpoint::new("office", "10.0.0.2"),
                office,
                &outside,
                &thresholds,
            ),
            evaluate_room(
                &SensorEndpoint::new("cellar", "10.0.0.3"),
                cellar,
                &outside,
                &thresholds,
            ),
        ];
        result
            .errors
            .push("bathroom: PROBLEM with sensor 'bathroom'. Answer is: 'Timeout'".to_string());
        result
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(datetime!(2026-01-14 07:05 UTC)), "07:05");
    }

    #[test]
    fn test_text_report_plain() {
        let report = ReportAssembler::new(Language::English);
        let text = format_poll_text(&sample_result(), &report, 10.0, &FormatOptions::new(true));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "(07:05)");
        assert_eq!(
            lines[1],
            "bathroom: PROBLEM with sensor 'bathroom'. Answer is: 'Timeout'"
        );
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "HUMIDITY (07:05)");
        assert_eq!(
            lines[4],
            "outside: temp: 10.0 °C, relhum: 80.0 %, abshum: 7.51 g/m3"
        );
        assert_eq!(
            lines[5],
            "office: 20.0 °C, 85.0 %, abshum: 14.69, abshumdiff to outside: 7.18 - ventilate -"
        );
        assert!(lines[6].starts_with("cellar: 9.0 °C, 75.0 %"));
        assert!(lines[6].ends_with("- more humid outside!* -"));
        assert_eq!(lines[7], " * (more humid or difference < 10%)");
        assert!(!text.contains("SUMMER"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_text_report_summer_luxembourgish() {
        let report = ReportAssembler::new(Language::Luxembourgish);
        let opts = FormatOptions::new(true).with_summer(true);
        let text = format_poll_text(&sample_result(), &report, 10.0, &opts);

        assert!(text.contains("FIICHTEGKEET (07:05)"));
        assert!(text.contains("SUMMER (07:05)"));
        assert!(text.contains("office: 20.0 °C, tempdiff zu baussen: 10.00 - leften -"));
        assert!(text.contains("cellar: 9.0 °C, tempdiff zu baussen: -1.00 - bausse méi warm -"));
    }

    #[test]
    fn test_text_report_colored() {
        let report = ReportAssembler::new(Language::English);
        let text = format_poll_text(&sample_result(), &report, 10.0, &FormatOptions::new(false));
        assert!(text.contains('\x1b'));
        assert!(text.contains("ventilate"));
    }

    #[test]
    fn test_outside_failure_shows_errors_only() {
        let report = ReportAssembler::new(Language::English);
        let mut result = PollResult::empty(datetime!(2026-01-14 21:30 UTC));
        result.errors = vec![
            "outside: PROBLEM with sensor 'outside'. Answer is: 'Timeout'".to_string(),
            report.no_outside_data().to_string(),
        ];

        let text = format_poll_text(&result, &report, 10.0, &FormatOptions::new(true));
        assert_eq!(text.lines().count(), 3);
        assert!(!text.contains("HUMIDITY"));
    }

    #[test]
    fn test_json_output() {
        let opts = FormatOptions::new(true).with_compact(true);
        let json = format_poll_json(&sample_result(), &opts).unwrap();
        assert!(json.ends_with('\n'));
        assert_eq!(json.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rooms"][0]["decision"], "Ventilate");
        assert_eq!(value["rooms"][1]["decision"], "MoreHumidOutside");
        assert_eq!(value["polled_at"], "2026-01-14T07:05:00Z");
    }
}
