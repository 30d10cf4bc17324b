//! Shared types for the airing advisor.
//!
//! This crate provides the data model used by the evaluation core
//! (airing-core) and the command-line front end (airing-cli).
//!
//! # Features
//!
//! - Sensor endpoints and the display language
//! - Parsing of the plain-text sensor wire format (`temp, <T> <RH>`)
//! - Derived readings, per-room evaluations and poll results
//! - Closed enums for humidity-mode and summer-mode recommendations
//!
//! # Example
//!
//! ```
//! use airing_types::{Reading, SensorEndpoint};
//!
//! let office = SensorEndpoint::new("office", "192.168.178.35");
//! let reading: Reading = "temp, 21.40 55.10".parse().unwrap();
//! assert_eq!(office.name, "office");
//! assert_eq!(reading.relative_humidity_pct, 55.1);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{
    AirDecision, DerivedReading, HUMIDITY_DISPLAY_LIMIT_PCT, Language, MAX_RESPONSE_BYTES,
    PollResult, QUERY_TOKEN, RESPONSE_TOKEN, Reading, RoomEvaluation, SensorEndpoint,
    SummerDecision,
};
