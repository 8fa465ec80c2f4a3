//! Prometheus metrics for tributos-service.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, CounterVec, TextEncoder};

/// Pipeline run counter by outcome.
pub static PIPELINE_RUNS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "tributos_pipeline_runs_total",
        "Total number of pipeline runs by outcome",
        &["outcome"] // completed, source_error
    )
    .expect("Failed to register pipeline_runs_total")
});

/// Tributo insert attempt counter by status.
pub static TRIBUTOS_PERSISTED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "tributos_persisted_total",
        "Total number of tributo insert attempts by status",
        &["status"] // inserted, failed
    )
    .expect("Failed to register tributos_persisted_total")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&PIPELINE_RUNS_TOTAL);
    Lazy::force(&TRIBUTOS_PERSISTED_TOTAL);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
