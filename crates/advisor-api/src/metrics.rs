//! Prometheus registry for `/metrics`
use advisor_core::{Action, ReasonCode};
use advisor_out::EntityState;
use advisor_runtime::StatePublisher;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// `source` label of states published by the runtime
pub const SOURCE_ENTITY: &str = "entity";

/// `source` label of stateless `/v1/evaluate` calls
pub const SOURCE_EVALUATE: &str = "evaluate";

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    recommendations: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let recommendations = IntCounterVec::new(
            Opts::new(
                "advisor_recommendations_total",
                "Recommendations produced, by action, reason and source",
            ),
            &["action", "reason", "source"],
        )?;
        registry.register(Box::new(recommendations.clone()))?;

        Ok(Self {
            registry,
            recommendations,
        })
    }

    pub fn record(&self, source: &str, action: Action, reason: ReasonCode) {
        self.recommendations
            .with_label_values(&[action.as_str(), reason.as_str(), source])
            .inc();
    }

    /// Current count for one label set
    pub fn count(&self, source: &str, action: Action, reason: ReasonCode) -> u64 {
        self.recommendations
            .with_label_values(&[action.as_str(), reason.as_str(), source])
            .get()
    }

    /// Text exposition of every registered metric
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

/// Counts every published state before handing it on
pub struct MetricsPublisher<P> {
    inner: P,
    metrics: Metrics,
}

impl<P> MetricsPublisher<P> {
    pub fn new(inner: P, metrics: Metrics) -> Self {
        Self { inner, metrics }
    }
}

impl<P: StatePublisher> StatePublisher for MetricsPublisher<P> {
    fn publish(&self, state: &EntityState) {
        self.metrics
            .record(SOURCE_ENTITY, state.action, state.reason_code);
        self.inner.publish(state);
    }
}
