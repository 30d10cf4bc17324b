//! Airing decision rules.
//!
//! This module holds the pure comparisons that turn a room reading and the
//! outside reading into a recommendation.
//!
//! # Humidity mode
//!
//! The absolute-humidity difference is checked first. Only when outside air
//! is drier by more than `min_relative_diff` of the room's absolute
//! humidity is the relative-humidity threshold consulted:
//!
//! | Outside sufficiently drier | RH ≥ threshold | Decision |
//! |---|---|---|
//! | yes | yes | [`AirDecision::Ventilate`] |
//! | yes | no | [`AirDecision::NoNeedToVentilate`] |
//! | no | any | [`AirDecision::MoreHumidOutside`] |
//!
//! # Summer mode
//!
//! Outside counts as cooler when the room is warmer by more than
//! `min_relative_diff` of the room temperature.
//!
//! # Example
//!
//! ```
//! use airing_core::Thresholds;
//! use airing_types::AirDecision;
//!
//! let thresholds = Thresholds::default();
//! // Room 14.69 g/m³, 7.18 g/m³ more than outside, 85 % RH.
//! assert_eq!(thresholds.evaluate_humidity(14.69, 7.18, 85.0), AirDecision::Ventilate);
//! ```

use serde::{Deserialize, Serialize};

use airing_types::{AirDecision, HUMIDITY_DISPLAY_LIMIT_PCT, SummerDecision};

/// Default relative-humidity threshold in percent.
pub const DEFAULT_HUMIDITY_THRESHOLD_PCT: f64 = 60.0;

/// Default minimum relative difference (10 %).
///
/// Should be at least the tolerance of the humidity sensors.
pub const DEFAULT_MIN_RELATIVE_DIFF: f64 = 0.10;

/// Decision thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Relative humidity (percent) at or above which a room should be aired.
    pub humidity_threshold_pct: f64,
    /// Minimum difference, as a fraction of the room value, for a comparison to count.
    pub min_relative_diff: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            humidity_threshold_pct: DEFAULT_HUMIDITY_THRESHOLD_PCT,
            min_relative_diff: DEFAULT_MIN_RELATIVE_DIFF,
        }
    }
}

impl Thresholds {
    /// Create thresholds from explicit values.
    pub fn new(humidity_threshold_pct: f64, min_relative_diff: f64) -> Self {
        Self {
            humidity_threshold_pct,
            min_relative_diff,
        }
    }

    /// Check whether the room's relative humidity is at or above the threshold.
    pub fn humidity_above_threshold(&self, rel_humidity_pct: f64) -> bool {
        rel_humidity_pct >= self.humidity_threshold_pct
    }

    /// Check whether outside air is drier by more than the minimum difference.
    pub fn drier_outside(&self, room_abs_humidity: f64, abs_humidity_diff: f64) -> bool {
        abs_humidity_diff > 0.0 && abs_humidity_diff > room_abs_humidity * self.min_relative_diff
    }

    /// Check whether outside is cooler by more than the minimum difference.
    pub fn cooler_outside(&self, room_temp_c: f64, temp_diff: f64) -> bool {
        temp_diff > 0.0 && temp_diff > room_temp_c * self.min_relative_diff
    }

    /// Humidity-mode decision.
    pub fn evaluate_humidity(
        &self,
        room_abs_humidity: f64,
        abs_humidity_diff: f64,
        room_rel_humidity_pct: f64,
    ) -> AirDecision {
        if self.drier_outside(room_abs_humidity, abs_humidity_diff) {
            if self.humidity_above_threshold(room_rel_humidity_pct) {
                AirDecision::Ventilate
            } else {
                AirDecision::NoNeedToVentilate
            }
        } else {
            AirDecision::MoreHumidOutside
        }
    }

    /// Summer-mode decision.
    pub fn evaluate_summer(&self, room_temp_c: f64, temp_diff: f64) -> SummerDecision {
        SummerDecision::from_cooler_outside(self.cooler_outside(room_temp_c, temp_diff))
    }

    /// Minimum relative difference as a whole percentage, for display.
    pub fn min_relative_diff_pct(&self) -> f64 {
        self.min_relative_diff * 100.0
    }
}

/// Check whether relative humidity is within the fixed display limit.
///
/// This is independent of [`Thresholds::humidity_threshold_pct`].
pub fn humidity_ok(rel_humidity_pct: f64) -> bool {
    rel_humidity_pct <= HUMIDITY_DISPLAY_LIMIT_PCT
}
