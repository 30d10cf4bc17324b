//! Glue between the configuration file and the evaluation core.

use airing_core::{EvalConfig, Evaluator, PollResult, ReportAssembler, SensorLink, TcpSensorLink};
use airing_types::{Language, SensorEndpoint};

use crate::config::Config;
use crate::format::{FormatOptions, format_poll_text};

/// Everything needed to run and render poll cycles.
pub struct Advisor<L> {
    evaluator: Evaluator<L>,
    outside: SensorEndpoint,
    rooms: Vec<SensorEndpoint>,
    eval: EvalConfig,
}

impl Advisor<TcpSensorLink> {
    /// Build an advisor that talks to the sensors over TCP.
    pub fn from_config(config: &Config) -> Self {
        let link = TcpSensorLink::new(config.link_options());
        Self::with_link(link, config)
    }
}

impl<L: SensorLink> Advisor<L> {
    /// Build an advisor over any link.
    pub fn with_link(link: L, config: &Config) -> Self {
        Self {
            evaluator: Evaluator::new(link).with_strategy(config.poll_strategy),
            outside: config.outside.clone(),
            rooms: config.rooms.clone(),
            eval: config.eval_config(),
        }
    }

    /// Override the display language.
    #[must_use]
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        if let Some(language) = language {
            self.eval.language = language;
        }
        self
    }

    /// Number of configured rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn report(&self) -> ReportAssembler {
        ReportAssembler::new(self.eval.language)
    }

    /// Run one poll cycle.
    pub async fn poll(&self) -> PollResult {
        tracing::debug!(
            "Polling {} and {} rooms on port {}",
            self.outside,
            self.rooms.len(),
            self.eval.port
        );
        self.evaluator
            .evaluate(&self.outside, &self.rooms, &self.eval)
            .await
    }

    /// Render a poll result as text.
    pub fn render(&self, result: &PollResult, opts: &FormatOptions) -> String {
        format_poll_text(
            result,
            &self.report(),
            self.eval.thresholds().min_relative_diff_pct(),
            opts,
        )
    }

    pub fn evaluator(&self) -> &Evaluator<L> {
        &self.evaluator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airing_core::MockSensorLink;

    #[tokio::test]
    async fn test_language_override() {
        let config = Config {
            rooms: vec![SensorEndpoint::new("office", "10.0.0.2")],
            ..Default::default()
        };
        let advisor = Advisor::with_link(MockSensorLink::new(), &config)
            .with_language(Some(Language::Luxembourgish));

        let result = advisor.poll().await;
        assert_eq!(
            result.errors[1],
            "Keng Werter vum Bausse-Sensor do - Keng Vergläicher méiglech!"
        );
        assert_eq!(advisor.room_count(), 1);
    }

    #[tokio::test]
    async fn test_render_uses_configured_difference() {
        let config = Config {
            min_relative_diff: 0.2,
            outside: SensorEndpoint::new("outside", "10.0.0.1"),
            rooms: vec![SensorEndpoint::new("office", "10.0.0.2")],
            ..Default::default()
        };
        let link = MockSensorLink::builder()
            .reading("10.0.0.1", 10.0, 80.0)
            .reading("10.0.0.2", 12.0, 70.0)
            .build();
        let advisor = Advisor::with_link(link, &config);

        let result = advisor.poll().await;
        let text = advisor.render(&result, &FormatOptions::new(true));
        assert!(text.contains("(more humid or difference < 20%)"), "{text}");
    }
}
