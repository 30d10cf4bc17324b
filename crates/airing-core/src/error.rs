//! Error types for airing-core.
//!
//! Two kinds of failure exist in this crate:
//!
//! - [`SensorError`]: a single sensor could not deliver a usable reading.
//!   These never abort a poll cycle; the evaluator turns each one into a
//!   localized message in [`PollResult::errors`](airing_types::PollResult).
//! - [`Error`]: the evaluation settings themselves are unusable.
//!
//! ## Sensor error classification
//!
//! | Variant | Cause |
//! |---------|-------|
//! | [`SensorError::ConnectTimeout`] | Connect timer elapsed, or the OS reported a timeout while connecting |
//! | [`SensorError::ConnectionProblem`] | Any other failure to establish the connection (refused, unreachable, reset) |
//! | [`SensorError::ReadTimeout`] | No response before the read timer elapsed |
//! | [`SensorError::UnclassifiedFailure`] | Anything else, with a short description |
//! | [`SensorError::MalformedResponse`] | A response arrived but is not `temp, <T> <RH>` |
//!
//! The classification is made from [`std::io::ErrorKind`] and timer expiry,
//! never from error message text.

use std::io;

use thiserror::Error;

/// Why one sensor query failed.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SensorError {
    /// The connection could not be established before the connect timeout.
    #[error("connection timed out")]
    ConnectTimeout,

    /// The connection could not be established.
    #[error("communication problem")]
    ConnectionProblem,

    /// The sensor did not answer before the read timeout.
    #[error("read timed out")]
    ReadTimeout,

    /// Unexpected failure, with a short description.
    #[error("unexpected failure: {0}")]
    UnclassifiedFailure(String),

    /// The sensor answered with something other than a reading.
    #[error("malformed response: '{0}'")]
    MalformedResponse(String),
}

impl SensorError {
    /// Classify an I/O error raised while establishing the connection.
    pub fn from_connect_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut => SensorError::ConnectTimeout,
            io::ErrorKind::InvalidInput => SensorError::UnclassifiedFailure(err.to_string()),
            _ => SensorError::ConnectionProblem,
        }
    }

    /// Classify an I/O error raised while sending the query or reading the answer.
    pub fn from_io_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => SensorError::ReadTimeout,
            _ => SensorError::UnclassifiedFailure(err.to_string()),
        }
    }

    /// Whether this error means the sensor was never reached.
    pub fn is_connect_failure(&self) -> bool {
        matches!(
            self,
            SensorError::ConnectTimeout | SensorError::ConnectionProblem
        )
    }
}

/// Errors in the evaluation settings.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type alias using airing-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
