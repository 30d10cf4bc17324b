//! Sensor polling and airing-decision engine.
//!
//! This crate queries networked temperature/humidity sensors over plain
//! TCP, computes absolute humidity and decides per room whether opening a
//! window is advisable.
//!
//! # Features
//!
//! - **Sensor link**: one short TCP exchange per sensor with separate connect/read timeouts
//! - **Error classification**: timeouts, connection problems and malformed answers
//! - **Humidity model**: Magnus-form absolute humidity in g/m³
//! - **Decisions**: humidity mode and summer (temperature) mode per room
//! - **Localized messages**: English and Luxembourgish
//! - **Testing**: [`MockSensorLink`] for running poll cycles without hardware
//!
//! # Decisions
//!
//! | Mode | Outcome |
//! |------|---------|
//! | Humidity | ventilate / no need to air / more humid outside |
//! | Summer | ventilate (cooler outside) / warmer outside |
//!
//! # Quick Start
//!
//! ```no_run
//! use airing_core::{EvalConfig, Evaluator, TcpSensorLink};
//! use airing_types::SensorEndpoint;
//!
//! #[tokio::main]
//! async fn main() {
//!     let outside = SensorEndpoint::new("outside", "192.168.178.31");
//!     let rooms = vec![
//!         SensorEndpoint::new("office", "192.168.178.35"),
//!         SensorEndpoint::new("bedroom", "192.168.178.36"),
//!     ];
//!
//!     let evaluator = Evaluator::new(TcpSensorLink::default());
//!     let result = evaluator.evaluate(&outside, &rooms, &EvalConfig::default()).await;
//!
//!     for room in &result.rooms {
//!         println!("{}: {:?}", room.room.name, room.decision);
//!     }
//!     for error in &result.errors {
//!         eprintln!("{error}");
//!     }
//! }
//! ```

pub mod error;
pub mod evaluator;
pub mod humidity;
pub mod link;
pub mod mock;
pub mod report;
pub mod thresholds;

pub use airing_types::types;

pub use error::{Error, Result, SensorError};
pub use evaluator::{EvalConfig, Evaluator, PollStrategy, evaluate_room};
pub use humidity::{absolute_humidity, derive, round2};
pub use link::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_PORT, DEFAULT_READ_TIMEOUT, LinkOptions, SensorLink,
    TcpSensorLink,
};
pub use mock::{MockSensorLink, MockSensorLinkBuilder};
pub use report::ReportAssembler;
pub use thresholds::{
    DEFAULT_HUMIDITY_THRESHOLD_PCT, DEFAULT_MIN_RELATIVE_DIFF, Thresholds, humidity_ok,
};

pub use airing_types::{
    AirDecision, DerivedReading, Language, PollResult, Reading, RoomEvaluation, SensorEndpoint,
    SummerDecision,
};
