//! Metrics collection and exposition.
//!
//! # Metrics
//! - `visitor_counter_attempts_total` (counter): attempts by outcome
//!   (`ok`, `network`, `status`, `timeout`, `payload`)
//! - `visitor_counter_attempt_duration_seconds` (histogram): attempt latency
//! - `visitor_counter_cycles_total` (counter): fetch cycles by outcome
//! - `visitor_counter_last_count` (gauge): last fetched count
//!
//! Without an installed recorder every call is a no-op.

use std::time::Duration;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::counter::FetchError;

/// Install a Prometheus recorder whose text rendering the caller can print.
pub fn install_prometheus() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

pub fn record_attempt(result: &Result<u64, FetchError>, elapsed: Duration) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    metrics::counter!("visitor_counter_attempts_total", "outcome" => outcome).increment(1);
    metrics::histogram!("visitor_counter_attempt_duration_seconds").record(elapsed.as_secs_f64());
}

pub fn record_cycle(outcome: &'static str) {
    metrics::counter!("visitor_counter_cycles_total", "outcome" => outcome).increment(1);
}

pub fn record_count(value: u64) {
    metrics::gauge!("visitor_counter_last_count").set(value as f64);
}
