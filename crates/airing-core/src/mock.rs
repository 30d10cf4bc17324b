//! Mock sensor link for testing.
//!
//! [`MockSensorLink`] implements [`SensorLink`] with canned answers per
//! address, so the evaluator can be exercised without any sensors on the
//! network.
//!
//! # Features
//!
//! - **Canned answers**: well-formed readings, arbitrary raw text, or a classified error
//! - **Latency simulation**: per-address delays to reorder concurrent completions
//! - **Call recording**: which addresses were queried, in what order
//!
//! Addresses without a configured answer fail with
//! [`SensorError::ConnectionProblem`], like an unreachable host.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::error::SensorError;
use crate::link::SensorLink;

#[derive(Debug, Clone)]
struct MockAnswer {
    answer: Result<String, SensorError>,
    latency: Duration,
}

/// A mock sensor network.
///
/// # Example
///
/// ```
/// use airing_core::{MockSensorLink, SensorLink};
///
/// #[tokio::main]
/// async fn main() {
///     let link = MockSensorLink::builder()
///         .reading("10.0.0.1", 20.0, 50.0)
///         .build();
///
///     assert_eq!(link.query("10.0.0.1", 23).await.unwrap(), "temp, 20.00 50.00");
///     assert!(link.query("10.0.0.2", 23).await.is_err());
/// }
/// ```
#[derive(Debug, Default)]
pub struct MockSensorLink {
    answers: RwLock<HashMap<String, MockAnswer>>,
    queried: Mutex<Vec<String>>,
    query_count: AtomicU32,
}

impl MockSensorLink {
    /// Create a mock link with no sensors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a mock link.
    pub fn builder() -> MockSensorLinkBuilder {
        MockSensorLinkBuilder::new()
    }

    fn format_reading(temperature_c: f64, rel_humidity_pct: f64) -> String {
        format!("temp, {temperature_c:.2} {rel_humidity_pct:.2}")
    }

    async fn set_answer(&self, address: &str, answer: Result<String, SensorError>) {
        let mut answers = self.answers.write().await;
        let entry = answers
            .entry(address.to_string())
            .or_insert_with(|| MockAnswer {
                answer: Err(SensorError::ConnectionProblem),
                latency: Duration::ZERO,
            });
        entry.answer = answer;
    }

    // --- Test control methods ---

    /// Answer with a well-formed reading.
    pub async fn set_reading(&self, address: &str, temperature_c: f64, rel_humidity_pct: f64) {
        self.set_answer(
            address,
            Ok(Self::format_reading(temperature_c, rel_humidity_pct)),
        )
        .await;
    }

    /// Answer with arbitrary raw text.
    pub async fn set_response(&self, address: &str, raw: &str) {
        self.set_answer(address, Ok(raw.to_string())).await;
    }

    /// Fail with the given error.
    pub async fn set_error(&self, address: &str, err: SensorError) {
        self.set_answer(address, Err(err)).await;
    }

    /// Delay the answer for one address.
    pub async fn set_latency(&self, address: &str, latency: Duration) {
        if let Some(entry) = self.answers.write().await.get_mut(address) {
            entry.latency = latency;
        }
    }

    /// Addresses queried so far, in call order.
    pub async fn queried(&self) -> Vec<String> {
        self.queried.lock().await.clone()
    }

    /// Get the number of queries performed.
    pub fn query_count(&self) -> u32 {
        self.query_count.load(Ordering::Relaxed)
    }

    /// Reset the call record.
    pub async fn reset_queries(&self) {
        self.queried.lock().await.clear();
        self.query_count.store(0, Ordering::Relaxed);
    }
}

#[async_trait]
impl SensorLink for MockSensorLink {
    async fn query(&self, address: &str, _port: u16) -> Result<String, SensorError> {
        self.query_count.fetch_add(1, Ordering::Relaxed);
        self.queried.lock().await.push(address.to_string());

        let answer = self.answers.read().await.get(address).cloned();
        match answer {
            Some(MockAnswer { answer, latency }) => {
                if !latency.is_zero() {
                    tokio::time::sleep(latency).await;
                }
                answer
            }
            None => Err(SensorError::ConnectionProblem),
        }
    }
}

/// Builder for creating mock links with preset answers.
#[derive(Debug, Default)]
pub struct MockSensorLinkBuilder {
    answers: HashMap<String, MockAnswer>,
}

impl MockSensorLinkBuilder {
    /// Create a new builder with no sensors.
    pub fn new() -> Self {
        Self::default()
    }

    fn answer(mut self, address: &str, answer: Result<String, SensorError>) -> Self {
        self.answers
            .entry(address.to_string())
            .and_modify(|a| a.answer = answer.clone())
            .or_insert(MockAnswer {
                answer,
                latency: Duration::ZERO,
            });
        self
    }

    /// Answer with a well-formed reading.
    #[must_use]
    pub fn reading(self, address: &str, temperature_c: f64, rel_humidity_pct: f64) -> Self {
        self.answer(
            address,
            Ok(MockSensorLink::format_reading(
                temperature_c,
                rel_humidity_pct,
            )),
        )
    }

    /// Answer with arbitrary raw text.
    #[must_use]
    pub fn response(self, address: &str, raw: &str) -> Self {
        self.answer(address, Ok(raw.to_string()))
    }

    /// Fail with the given error.
    #[must_use]
    pub fn error(self, address: &str, err: SensorError) -> Self {
        self.answer(address, Err(err))
    }

    /// Delay the answer for an address configured earlier.
    #[must_use]
    pub fn latency(mut self, address: &str, latency: Duration) -> Self {
        if let Some(entry) = self.answers.get_mut(address) {
            entry.latency = latency;
        }
        self
    }

    /// Build the mock link.
    pub fn build(self) -> MockSensorLink {
        MockSensorLink {
            answers: RwLock::new(self.answers),
            queried: Mutex::new(Vec::new()),
            query_count: AtomicU32::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_address_fails() {
        let link = MockSensorLink::new();
        let err = link.query("10.0.0.9", 23).await.unwrap_err();
        assert_eq!(err, SensorError::ConnectionProblem);
        assert_eq!(link.query_count(), 1);
    }

    #[tokio::test]
    async fn test_builder_answers() {
        let link = MockSensorLink::builder()
            .reading("a", -3.5, 91.0)
            .response("b", "garbage")
            .error("c", SensorError::ReadTimeout)
            .build();

        assert_eq!(link.query("a", 23).await.unwrap(), "temp, -3.50 91.00");
        assert_eq!(link.query("b", 23).await.unwrap(), "garbage");
        assert_eq!(
            link.query("c", 23).await.unwrap_err(),
            SensorError::ReadTimeout
        );
        assert_eq!(link.queried().await, vec!["a", "b", "c"]);
        assert_eq!(link.query_count(), 3);
    }

    #[tokio::test]
    async fn test_builder_later_answer_wins() {
        let link = MockSensorLink::builder()
            .reading("a", 1.0, 2.0)
            .error("a", SensorError::ConnectTimeout)
            .build();
        assert_eq!(
            link.query("a", 23).await.unwrap_err(),
            SensorError::ConnectTimeout
        );
    }

    #[tokio::test]
    async fn test_runtime_setters() {
        let link = MockSensorLink::new();
        link.set_reading("a", 20.0, 50.0).await;
        assert_eq!(link.query("a", 23).await.unwrap(), "temp, 20.00 50.00");

        link.set_response("a", "").await;
        assert_eq!(link.query("a", 23).await.unwrap(), "");

        link.set_error("a", SensorError::UnclassifiedFailure("x".into()))
            .await;
        assert!(link.query("a", 23).await.is_err());

        link.reset_queries().await;
        assert_eq!(link.query_count(), 0);
        assert!(link.queried().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let link = MockSensorLink::builder()
            .reading("slow", 20.0, 50.0)
            .latency("slow", Duration::from_secs(3))
            .build();
        link.set_latency("slow", Duration::from_secs(4)).await;

        let start = tokio::time::Instant::now();
        link.query("slow", 23).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_via_trait_object() {
        let link: Box<dyn SensorLink> =
            Box::new(MockSensorLink::builder().reading("a", 5.0, 90.0).build());
        assert!(link.query("a", 23).await.unwrap().starts_with("temp"));
    }
}
