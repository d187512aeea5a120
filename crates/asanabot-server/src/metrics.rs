use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::IntCounter;

lazy_static! {
    pub static ref ASANA_API_CALLS: IntCounter =
        IntCounter::new("asana_api_calls", "Asana API calls").unwrap();
    pub static ref WEBHOOK_EVENTS: IntCounter =
        IntCounter::new("asana_webhook_events", "Asana webhook events received").unwrap();
}

pub(crate) fn build_metrics_handler() -> PrometheusMetrics {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .unwrap();

    setup_process_metrics(&prometheus);

    prometheus
        .registry
        .register(Box::new(ASANA_API_CALLS.clone()))
        .unwrap();
    prometheus
        .registry
        .register(Box::new(WEBHOOK_EVENTS.clone()))
        .unwrap();
    prometheus
}

#[cfg(unix)]
fn setup_process_metrics(metrics: &PrometheusMetrics) {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .unwrap();
}

#[cfg(not(unix))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) {}
