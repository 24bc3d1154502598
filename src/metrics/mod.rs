use anyhow::Result;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

pub fn setup_metrics_recorder() -> Result<PrometheusHandle> {
    const EXPONENTIAL_SECONDS: &[f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("index_page_render_seconds".to_string()),
            EXPONENTIAL_SECONDS,
        )?
        .set_buckets_for_metric(
            Matcher::Full("index_data_refresh_seconds".to_string()),
            EXPONENTIAL_SECONDS,
        )?
        .install_recorder()?;

    Ok(handle)
}

#[derive(Clone)]
pub struct Metrics {
    pub prometheus_handle: PrometheusHandle,
}

impl Metrics {
    pub fn new(prometheus_handle: PrometheusHandle) -> Self {
        Self { prometheus_handle }
    }

    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

/// Records how long building and rendering the index page took.
pub fn record_index_page_render(duration: Duration) {
    metrics::histogram!("index_page_render_seconds", duration.as_secs_f64());
}

/// Records a successful snapshot refresh and the height it observed.
pub fn record_index_data_refresh(duration: Duration, latest_height: i64) {
    metrics::histogram!("index_data_refresh_seconds", duration.as_secs_f64());
    metrics::gauge!("index_data_latest_height", latest_height as f64);
}

pub fn record_index_data_refresh_failure() {
    metrics::increment_counter!("index_data_refresh_failures_total");
}

/// Counts requests answered with a 503, labelled by route.
pub fn record_handler_failure(route: &'static str) {
    metrics::increment_counter!("http_handler_failures_total", "route" => route);
}
