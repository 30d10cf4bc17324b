//! Localized labels and messages.
//!
//! [`ReportAssembler`] maps decisions and failures to display text in the
//! configured [`Language`]. It produces plain strings only; coloring is up
//! to the presentation layer.
//!
//! # Example
//!
//! ```
//! use airing_core::ReportAssembler;
//! use airing_types::{AirDecision, Language};
//!
//! let en = ReportAssembler::new(Language::English);
//! assert_eq!(en.decision_label(AirDecision::Ventilate), "ventilate");
//!
//! let lu = ReportAssembler::new(Language::Luxembourgish);
//! assert_eq!(lu.decision_label(AirDecision::Ventilate), "leften");
//! ```

use airing_types::{AirDecision, Language, SummerDecision};

use crate::error::SensorError;

/// Builds display text for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportAssembler {
    language: Language,
}

impl ReportAssembler {
    /// Create an assembler for the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get the language.
    pub fn language(&self) -> Language {
        self.language
    }

    fn pick(&self, en: &'static str, lu: &'static str) -> &'static str {
        match self.language {
            Language::English => en,
            Language::Luxembourgish => lu,
        }
    }

    /// Label for a humidity-mode decision.
    pub fn decision_label(&self, decision: AirDecision) -> &'static str {
        match decision {
            AirDecision::Ventilate => self.pick("ventilate", "leften"),
            AirDecision::NoNeedToVentilate => self.pick("no need to air", "brauch net leften"),
            AirDecision::MoreHumidOutside => {
                self.pick("more humid outside!*", "bausse méi fiicht! *")
            }
        }
    }

    /// Label for a summer-mode decision.
    pub fn summer_label(&self, decision: SummerDecision) -> &'static str {
        match decision {
            SummerDecision::VentilateCooler => self.pick("ventilate", "leften"),
            SummerDecision::StayClosedWarmer => self.pick("warmer outside", "bausse méi warm"),
        }
    }

    /// Describe a sensor failure.
    ///
    /// For malformed responses this is the raw response itself.
    pub fn error_detail(&self, err: &SensorError) -> String {
        match err {
            SensorError::ConnectTimeout => {
                self.pick("connection timed out", "Timeout beim Verbannen").to_string()
            }
            SensorError::ConnectionProblem => {
                self.pick("communication problem", "Verbindungsproblem").to_string()
            }
            SensorError::ReadTimeout => "Timeout".to_string(),
            SensorError::UnclassifiedFailure(detail) => match self.language {
                Language::English => format!("unexpected failure: {detail}"),
                Language::Luxembourgish => format!("allgemenge Feeler: {detail}"),
            },
            SensorError::MalformedResponse(raw) => raw.clone(),
        }
    }

    /// Message for a sensor that could not deliver a reading.
    pub fn sensor_error(&self, name: &str, err: &SensorError) -> String {
        let detail = self.error_detail(err);
        match self.language {
            Language::English => {
                format!("{name}: PROBLEM with sensor '{name}'. Answer is: '{detail}'")
            }
            Language::Luxembourgish => {
                format!("{name}: FEHLER beim Sensor '{name}'. Äntwert as: '{detail}'")
            }
        }
    }

    /// Message when the outside sensor failed.
    pub fn no_outside_data(&self) -> &'static str {
        self.pick(
            "No data available from outside-sensor, comparison not possible",
            "Keng Werter vum Bausse-Sensor do - Keng Vergläicher méiglech!",
        )
    }

    /// Message when no room sensor answered.
    pub fn no_sensor_data(&self) -> &'static str {
        self.pick(
            "No sensor data available, evaluation not possible!",
            "Keng Werter vun Sensoren do, keng Angab méiglech!",
        )
    }

    /// Heading of the humidity report.
    pub fn humidity_heading(&self) -> &'static str {
        self.pick("HUMIDITY", "FIICHTEGKEET")
    }

    /// Heading of the summer report.
    pub fn summer_heading(&self) -> &'static str {
        "SUMMER"
    }

    /// Label preceding a difference to the outside value.
    pub fn to_outside(&self) -> &'static str {
        self.pick("to outside", "zu baussen")
    }

    /// Footnote explaining the more-humid-outside marker.
    pub fn more_humid_note(&self, min_relative_diff_pct: f64) -> String {
        match self.language {
            Language::English => {
                format!("(more humid or difference < {min_relative_diff_pct:.0}%)")
            }
            Language::Luxembourgish => {
                format!("(méi fiicht resp. Differenz < {min_relative_diff_pct:.0}%)")
            }
        }
    }

    /// Prompt shown by the interactive shell.
    pub fn prompt(&self) -> &'static str {
        self.pick(
            "'r' for refresh/display, 's' for summer mode, 'e' for exit: ",
            "'r' fier refresh/uweisen, 's' fier summerversioun, 'e' fier exit: ",
        )
    }
}
