//! Prometheus metrics
//!
//! Counters are registered lazily on first increment; the exporter
//! renders them at `/metrics`.

use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Called once at startup; a failed
/// install (e.g. a second recorder in tests) is logged and the server
/// runs without metrics.
pub fn install_recorder() {
    if HANDLE.get().is_some() {
        return;
    }
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = HANDLE.set(handle);
        }
        Err(e) => {
            tracing::warn!("failed to install metrics recorder: {e}");
        }
    }
}

/// Render the metrics page
pub async fn metrics_handler() -> String {
    HANDLE.get().map(|h| h.render()).unwrap_or_default()
}

/// Count one inbound webhook message
pub fn record_inbound() {
    metrics::counter!("commerce_bot_messages_total").increment(1);
}

/// Count one handler failure answered with the apology reply
pub fn record_handler_error() {
    metrics::counter!("commerce_bot_handler_errors_total").increment(1);
}
