//! Poll cycle: query the sensors and evaluate every room.
//!
//! The [`Evaluator`] queries the outside sensor first. Only when that
//! succeeds are the rooms queried, each compared against the outside
//! reading. Sensor failures never abort the cycle; each becomes a
//! localized message in [`PollResult::errors`].
//!
//! # Example
//!
//! ```
//! use airing_core::{EvalConfig, Evaluator, MockSensorLink};
//! use airing_types::{AirDecision, SensorEndpoint};
//!
//! #[tokio::main]
//! async fn main() {
//!     let link = MockSensorLink::builder()
//!         .reading("10.0.0.1", 10.0, 80.0)
//!         .reading("10.0.0.2", 20.0, 85.0)
//!         .build();
//!
//!     let outside = SensorEndpoint::new("outside", "10.0.0.1");
//!     let rooms = [SensorEndpoint::new("office", "10.0.0.2")];
//!
//!     let result = Evaluator::new(link)
//!         .evaluate(&outside, &rooms, &EvalConfig::default())
//!         .await;
//!     assert_eq!(result.rooms[0].decision, AirDecision::Ventilate);
//! }
//! ```

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, warn};

use airing_types::{
    DerivedReading, Language, PollResult, Reading, RoomEvaluation, SensorEndpoint,
};

use crate::error::{Error, Result, SensorError};
use crate::humidity::{derive, round2};
use crate::link::{DEFAULT_PORT, SensorLink};
use crate::report::ReportAssembler;
use crate::thresholds::{
    DEFAULT_HUMIDITY_THRESHOLD_PCT, DEFAULT_MIN_RELATIVE_DIFF, Thresholds, humidity_ok,
};

/// Settings for one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// TCP port shared by all sensors.
    pub port: u16,
    /// Relative humidity (percent) at or above which a room should be aired.
    pub humidity_threshold_pct: f64,
    /// Minimum difference, as a fraction of the room value.
    pub min_relative_diff: f64,
    /// Language of the error messages.
    pub language: Language,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            humidity_threshold_pct: DEFAULT_HUMIDITY_THRESHOLD_PCT,
            min_relative_diff: DEFAULT_MIN_RELATIVE_DIFF,
            language: Language::default(),
        }
    }
}

impl EvalConfig {
    /// Decision thresholds derived from this config.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.humidity_threshold_pct, self.min_relative_diff)
    }

    /// Check that the values make sense.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the port is zero, the threshold
    /// is negative or not finite, or `min_relative_diff` is outside `[0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(Error::invalid_config("port must not be 0"));
        }
        if !self.humidity_threshold_pct.is_finite() || self.humidity_threshold_pct < 0.0 {
            return Err(Error::invalid_config(format!(
                "humidity_threshold_pct must be a non-negative number, got {}",
                self.humidity_threshold_pct
            )));
        }
        if !(0.0..1.0).contains(&self.min_relative_diff) {
            return Err(Error::invalid_config(format!(
                "min_relative_diff must be in [0, 1), got {}",
                self.min_relative_diff
            )));
        }
        Ok(())
    }
}

/// Outcome of querying one sensor.
type Polled = std::result::Result<DerivedReading, SensorError>;

/// How room sensors are queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStrategy {
    /// One room after the other; at most one open connection.
    #[default]
    Sequential,
    /// All rooms at once; results are still reported in configured order.
    Concurrent,
}

/// Runs poll cycles over a [`SensorLink`].
#[derive(Debug, Clone)]
pub struct Evaluator<L> {
    link: L,
    strategy: PollStrategy,
}

impl<L: SensorLink> Evaluator<L> {
    /// Create an evaluator that queries rooms sequentially.
    pub fn new(link: L) -> Self {
        Self {
            link,
            strategy: PollStrategy::default(),
        }
    }

    /// Set the poll strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: PollStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Get the poll strategy.
    pub fn strategy(&self) -> PollStrategy {
        self.strategy
    }

    /// Get the underlying link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Query one sensor and derive its reading.
    async fn poll(&self, endpoint: &SensorEndpoint, port: u16) -> Polled {
        let raw = self.link.query(&endpoint.address, port).await?;
        debug!("{} answered {:?}", endpoint, raw);

        let reading = Reading::parse(&raw).map_err(|e| {
            debug!("Rejected answer from {}: {}", endpoint, e);
            SensorError::MalformedResponse(raw.clone())
        })?;

        let derived = derive(reading);
        debug!(
            "{}: {:.2} °C, {:.2} %, {:.2} g/m³",
            endpoint.name,
            derived.temperature_c,
            derived.relative_humidity_pct,
            derived.absolute_humidity
        );
        Ok(derived)
    }

    async fn poll_rooms(&self, rooms: &[SensorEndpoint], port: u16) -> Vec<Polled> {
        match self.strategy {
            PollStrategy::Sequential => {
                let mut results = Vec::with_capacity(rooms.len());
                for room in rooms {
                    results.push(self.poll(room, port).await);
                }
                results
            }
            PollStrategy::Concurrent => {
                join_all(rooms.iter().map(|room| self.poll(room, port))).await
            }
        }
    }

    /// Run one poll cycle.
    ///
    /// Never fails: sensor problems are reported in the returned
    /// [`PollResult::errors`]. If the outside sensor fails, no room is
    /// queried.
    pub async fn evaluate(
        &self,
        outside: &SensorEndpoint,
        rooms: &[SensorEndpoint],
        config: &EvalConfig,
    ) -> PollResult {
        let report = ReportAssembler::new(config.language);
        let thresholds = config.thresholds();
        let mut result = PollResult::empty(now());

        let outside_reading = match self.poll(outside, config.port).await {
            Ok(reading) => reading,
            Err(e) => {
                warn!("Outside sensor {} failed: {}", outside, e);
                result.errors.push(report.sensor_error(&outside.name, &e));
                result.errors.push(report.no_outside_data().to_string());
                return result;
            }
        };
        result.outside = Some(outside_reading);

        let polled = self.poll_rooms(rooms, config.port).await;
        for (room, outcome) in rooms.iter().zip(polled) {
            match outcome {
                Ok(reading) => result.rooms.push(evaluate_room(
                    room,
                    reading,
                    &outside_reading,
                    &thresholds,
                )),
                Err(e) => {
                    warn!("Room sensor {} failed: {}", room, e);
                    result.errors.push(report.sensor_error(&room.name, &e));
                }
            }
        }

        if result.rooms.is_empty() {
            result.errors.push(report.no_sensor_data().to_string());
        }

        debug!(
            "Poll finished: {} of {} rooms evaluated, {} errors",
            result.rooms.len(),
            rooms.len(),
            result.errors.len()
        );
        result
    }
}

/// Compare one room's reading with the outside reading.
pub fn evaluate_room(
    room: &SensorEndpoint,
    reading: DerivedReading,
    outside: &DerivedReading,
    thresholds: &Thresholds,
) -> RoomEvaluation {
    let temperature_diff_outside = round2(reading.temperature_c - outside.temperature_c);
    let abs_humidity_diff_outside = round2(reading.absolute_humidity - outside.absolute_humidity);
    let cooler_outside = thresholds.cooler_outside(reading.temperature_c, temperature_diff_outside);

    RoomEvaluation {
        room: room.clone(),
        reading,
        temperature_diff_outside,
        abs_humidity_diff_outside,
        humidity_above_threshold: thresholds.humidity_above_threshold(reading.relative_humidity_pct),
        humidity_ok: humidity_ok(reading.relative_humidity_pct),
        cooler_outside,
        decision: thresholds.evaluate_humidity(
            reading.absolute_humidity,
            abs_humidity_diff_outside,
            reading.relative_humidity_pct,
        ),
        summer: thresholds.evaluate_summer(reading.temperature_c, temperature_diff_outside),
    }
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
