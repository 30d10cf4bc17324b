//! Absolute humidity from temperature and relative humidity.
//!
//! Uses the Magnus-form approximation of saturation vapour pressure:
//!
//! ```text
//! AH = (6.112 · e^(17.67·T / (T + 243.5)) · RH · 2.1674) / (273.15 + T)
//! ```
//!
//! with `T` in °C, `RH` in percent and `AH` in g/m³.
//!
//! # Example
//!
//! ```
//! use airing_core::humidity::{absolute_humidity, round2};
//!
//! let ah = absolute_humidity(20.0, 50.0);
//! assert_eq!(round2(ah), 8.64);
//! ```

use airing_types::{DerivedReading, Reading};

const MAGNUS_HPA: f64 = 6.112;
const MAGNUS_B: f64 = 17.67;
const MAGNUS_C: f64 = 243.5;
/// Molar mass of water over the gas constant, scaled for hPa and g/m³.
const WATER_VAPOUR_FACTOR: f64 = 2.1674;
const ZERO_CELSIUS_K: f64 = 273.15;

/// Absolute humidity in g/m³.
///
/// No validation is done; callers pass physically plausible values.
#[must_use]
pub fn absolute_humidity(temp_c: f64, rel_humidity_pct: f64) -> f64 {
    let saturation = MAGNUS_HPA * ((MAGNUS_B * temp_c) / (temp_c + MAGNUS_C)).exp();
    (saturation * rel_humidity_pct * WATER_VAPOUR_FACTOR) / (ZERO_CELSIUS_K + temp_c)
}

/// Round to two decimals, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive the stored reading: absolute humidity rounded to two decimals.
#[must_use]
pub fn derive(reading: Reading) -> DerivedReading {
    DerivedReading {
        temperature_c: reading.temperature_c,
        relative_humidity_pct: reading.relative_humidity_pct,
        absolute_humidity: round2(absolute_humidity(
            reading.temperature_c,
            reading.relative_humidity_pct,
        )),
    }
}
