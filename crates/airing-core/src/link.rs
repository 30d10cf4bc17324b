//! Network link to a single sensor.
//!
//! Each query opens a fresh TCP connection, sends the `temp.` token, reads
//! one response of at most [`MAX_RESPONSE_BYTES`] bytes and drops the
//! connection again. Failures are returned as a classified
//! [`SensorError`]; nothing is retried here.
//!
//! # Example
//!
//! ```no_run
//! use airing_core::{LinkOptions, SensorLink, TcpSensorLink};
//!
//! # async fn example() {
//! let link = TcpSensorLink::new(LinkOptions::default());
//! match link.query("192.168.178.31", 23).await {
//!     Ok(raw) => println!("sensor said: {raw}"),
//!     Err(e) => eprintln!("sensor failed: {e}"),
//! }
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace};

use airing_types::{MAX_RESPONSE_BYTES, QUERY_TOKEN};

use crate::error::SensorError;

/// Default TCP port of the sensors.
pub const DEFAULT_PORT: u16 = 23;

/// Default timeout for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default timeout for waiting on the response.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Trait abstracting a query against one sensor.
///
/// Implemented by [`TcpSensorLink`] for real sensors and by
/// [`MockSensorLink`](crate::mock::MockSensorLink) for tests.
#[async_trait]
pub trait SensorLink: Send + Sync {
    /// Ask the sensor at `address:port` for its current values.
    ///
    /// Returns the raw response text. The response is not validated here.
    async fn query(&self, address: &str, port: u16) -> Result<String, SensorError>;
}

/// Timeouts for one sensor query.
///
/// The connect and read phases are bounded independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Upper bound for establishing the connection.
    pub connect_timeout: Duration,
    /// Upper bound for waiting on the response once connected.
    pub read_timeout: Duration,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl LinkOptions {
    /// Set the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout.
    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Worst-case wall-clock time one hung sensor can cost.
    #[must_use]
    pub fn worst_case(&self) -> Duration {
        self.connect_timeout + self.read_timeout
    }
}

/// Plain-TCP sensor link.
#[derive(Debug, Clone, Default)]
pub struct TcpSensorLink {
    options: LinkOptions,
}

impl TcpSensorLink {
    /// Create a link with the given timeouts.
    pub fn new(options: LinkOptions) -> Self {
        Self { options }
    }

    /// Get the configured timeouts.
    pub fn options(&self) -> &LinkOptions {
        &self.options
    }
}

#[async_trait]
impl SensorLink for TcpSensorLink {
    async fn query(&self, address: &str, port: u16) -> Result<String, SensorError> {
        query(address, port, &self.options).await
    }
}

/// Query one sensor with the given timeouts.
///
/// The stream is owned by this function, so the connection is closed on
/// every return path.
pub async fn query(address: &str, port: u16, options: &LinkOptions) -> Result<String, SensorError> {
    debug!("Connecting to sensor at {}:{}", address, port);

    let mut stream = match timeout(options.connect_timeout, TcpStream::connect((address, port)))
        .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            debug!("Connect to {}:{} failed: {}", address, port, e);
            return Err(SensorError::from_connect_error(&e));
        }
        Err(_) => {
            debug!(
                "Connect to {}:{} timed out after {:?}",
                address, port, options.connect_timeout
            );
            return Err(SensorError::ConnectTimeout);
        }
    };

    stream
        .write_all(QUERY_TOKEN)
        .await
        .map_err(|e| SensorError::from_io_error(&e))?;

    let mut buf = [0u8; MAX_RESPONSE_BYTES];
    let len = match timeout(options.read_timeout, stream.read(&mut buf)).await {
        Ok(Ok(len)) => len,
        Ok(Err(e)) => return Err(SensorError::from_io_error(&e)),
        Err(_) => {
            debug!(
                "No answer from {}:{} within {:?}",
                address, port, options.read_timeout
            );
            return Err(SensorError::ReadTimeout);
        }
    };

    let answer = String::from_utf8_lossy(&buf[..len]).into_owned();
    trace!("Sensor {}:{} answered {:?}", address, port, answer);
    Ok(answer)
}
