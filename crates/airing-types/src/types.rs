//! Core types for airing sensor data.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Token every well-formed sensor response starts with.
pub const RESPONSE_TOKEN: &str = "temp";

/// Request sent to a sensor to ask for its current values.
pub const QUERY_TOKEN: &[u8; 5] = b"temp.";

/// Upper bound on the number of response bytes read from a sensor.
pub const MAX_RESPONSE_BYTES: usize = 1024;

/// Display limit for relative humidity, independent of the decision threshold.
pub const HUMIDITY_DISPLAY_LIMIT_PCT: f64 = 60.0;

/// A named sensor reachable over the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorEndpoint {
    /// Room (or place) name shown in reports.
    pub name: String,
    /// Host name or IP address of the sensor.
    pub address: String,
}

impl SensorEndpoint {
    /// Create an endpoint from a name and address.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for SensorEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

/// Display language for labels and error messages.
///
/// Serialized as the short codes `"en"` and `"lu"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    /// English.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    /// Luxembourgish.
    #[cfg_attr(feature = "serde", serde(rename = "lu"))]
    Luxembourgish,
}

impl Language {
    /// Short code used in configuration files.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Luxembourgish => "lu",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    /// Parse a language code (case-insensitive).
    ///
    /// ```
    /// use airing_types::Language;
    ///
    /// assert_eq!("en".parse::<Language>(), Ok(Language::English));
    /// assert_eq!("LU".parse::<Language>(), Ok(Language::Luxembourgish));
    /// assert!("fr".parse::<Language>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "lu" | "lb" | "luxembourgish" => Ok(Language::Luxembourgish),
            other => Err(format!("unknown language '{other}' (expected 'en' or 'lu')")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Temperature and relative humidity as reported by a sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub relative_humidity_pct: f64,
}

impl Reading {
    /// Parse a sensor response in the wire format `temp, <T> <RH>`.
    ///
    /// The response must start with `temp`; the second and third
    /// whitespace-separated fields are the temperature and relative
    /// humidity. Anything after the third field is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use airing_types::Reading;
    ///
    /// let reading = Reading::parse("temp, 2.87 78.36").unwrap();
    /// assert_eq!(reading.temperature_c, 2.87);
    /// assert_eq!(reading.relative_humidity_pct, 78.36);
    ///
    /// assert!(Reading::parse("garbage").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the token is missing, a field is absent,
    /// or a field is not a finite number.
    #[must_use = "parsing returns a Result that should be handled"]
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if !raw.starts_with(RESPONSE_TOKEN) {
            return Err(ParseError::MissingToken);
        }

        let mut fields = raw.split_whitespace().skip(1);
        let temperature_c = parse_field(fields.next(), "temperature")?;
        let relative_humidity_pct = parse_field(fields.next(), "humidity")?;

        Ok(Reading {
            temperature_c,
            relative_humidity_pct,
        })
    }
}

impl FromStr for Reading {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reading::parse(s)
    }
}

fn parse_field(field: Option<&str>, name: &'static str) -> Result<f64, ParseError> {
    let text = field.ok_or(ParseError::MissingField(name))?;
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber {
            field: name,
            value: text.to_string(),
        }),
    }
}

/// A reading enriched with its absolute humidity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivedReading {
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Relative humidity in percent.
    pub relative_humidity_pct: f64,
    /// Absolute humidity in g/m³, rounded to two decimals.
    pub absolute_humidity: f64,
}

/// Humidity-mode airing recommendation for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirDecision {
    /// Outside air is sufficiently drier and the room is above the threshold.
    Ventilate,
    /// Outside air is drier, but the room is below the threshold.
    NoNeedToVentilate,
    /// Outside air is as humid or more humid (or the difference is too small).
    MoreHumidOutside,
}

/// Summer-mode recommendation for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SummerDecision {
    /// Outside is sufficiently cooler; open the windows.
    VentilateCooler,
    /// Outside is warmer (or not cool enough); keep the windows closed.
    StayClosedWarmer,
}

impl SummerDecision {
    /// Map the cooler-outside flag to a recommendation.
    ///
    /// ```
    /// use airing_types::SummerDecision;
    ///
    /// assert_eq!(SummerDecision::from_cooler_outside(true), SummerDecision::VentilateCooler);
    /// assert_eq!(SummerDecision::from_cooler_outside(false), SummerDecision::StayClosedWarmer);
    /// ```
    #[must_use]
    pub fn from_cooler_outside(cooler_outside: bool) -> Self {
        if cooler_outside {
            SummerDecision::VentilateCooler
        } else {
            SummerDecision::StayClosedWarmer
        }
    }
}

/// Evaluation of one room against the outside reading.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomEvaluation {
    /// The room's sensor.
    pub room: SensorEndpoint,
    /// The room's derived reading.
    pub reading: DerivedReading,
    /// Room temperature minus outside temperature (°C, two decimals).
    pub temperature_diff_outside: f64,
    /// Room absolute humidity minus outside absolute humidity (g/m³, two decimals).
    pub abs_humidity_diff_outside: f64,
    /// Relative humidity is at or above the configured threshold.
    pub humidity_above_threshold: bool,
    /// Relative humidity is within the fixed display limit.
    pub humidity_ok: bool,
    /// Outside is sufficiently cooler than the room.
    pub cooler_outside: bool,
    /// Humidity-mode recommendation.
    pub decision: AirDecision,
    /// Summer-mode recommendation.
    pub summer: SummerDecision,
}

/// Outcome of one complete poll cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollResult {
    /// Outside reading, if the outside sensor answered.
    pub outside: Option<DerivedReading>,
    /// Room evaluations in configured order.
    pub rooms: Vec<RoomEvaluation>,
    /// Localized error messages in the order they occurred.
    pub errors: Vec<String>,
    /// When the poll started.
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub polled_at: time::OffsetDateTime,
}

impl PollResult {
    /// An empty result stamped with the given time.
    #[must_use]
    pub fn empty(polled_at: time::OffsetDateTime) -> Self {
        Self {
            outside: None,
            rooms: Vec::new(),
            errors: Vec::new(),
            polled_at,
        }
    }

    /// Whether any communication error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any room could not be aired because outside is more humid.
    #[must_use]
    pub fn any_more_humid_outside(&self) -> bool {
        self.rooms
            .iter()
            .any(|r| r.decision == AirDecision::MoreHumidOutside)
    }

    /// Look up a room evaluation by room name.
    #[must_use]
    pub fn room(&self, name: &str) -> Option<&RoomEvaluation> {
        self.rooms.iter().find(|r| r.room.name == name)
    }
}
