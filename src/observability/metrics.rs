use std::time::Instant;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGaugeVec, Opts, Registry,
    TextEncoder,
};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub api_requests_total: IntCounterVec,
    pub api_request_duration_seconds: HistogramVec,
    pub records_total: IntGaugeVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let api_requests_total = IntCounterVec::new(
            Opts::new("api_requests_total", "API requests by entity, operation and outcome"),
            &["entity", "operation", "outcome"],
        )
        .expect("valid api_requests_total metric");

        let api_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "api_request_duration_seconds",
                "Time spent serving API requests in seconds",
            ),
            &["entity", "operation"],
        )
        .expect("valid api_request_duration_seconds metric");

        let records_total = IntGaugeVec::new(
            Opts::new("records_total", "Records currently held per entity"),
            &["entity"],
        )
        .expect("valid records_total metric");

        registry
            .register(Box::new(api_requests_total.clone()))
            .expect("register api_requests_total");
        registry
            .register(Box::new(api_request_duration_seconds.clone()))
            .expect("register api_request_duration_seconds");
        registry
            .register(Box::new(records_total.clone()))
            .expect("register records_total");

        Self {
            registry,
            api_requests_total,
            api_request_duration_seconds,
            records_total,
        }
    }

    pub fn observe(&self, entity: &str, operation: &str, succeeded: bool, started: Instant) {
        let outcome = if succeeded { "success" } else { "error" };

        self.api_requests_total
            .with_label_values(&[entity, operation, outcome])
            .inc();
        self.api_request_duration_seconds
            .with_label_values(&[entity, operation])
            .observe(started.elapsed().as_secs_f64());
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::Metrics;

    #[test]
    fn observed_requests_show_up_in_text_output() {
        let metrics = Metrics::new();
        metrics.observe("orders", "list", true, Instant::now());
        metrics.observe("orders", "update", false, Instant::now());

        let text = metrics.encode().unwrap();
        assert!(text.contains(
            "api_requests_total{entity=\"orders\",operation=\"list\",outcome=\"success\"} 1"
        ));
        assert!(text.contains("outcome=\"error\""));
        assert!(text.contains("api_request_duration_seconds_bucket"));
    }
}
