/*!
 * Tracing Setup
 * Structured tracing bootstrap and per-run spans
 */

use std::time::Instant;
use tracing::{debug, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHEDSIM_TRACE_JSON: Enable JSON output (default: false)
///
/// All diagnostics go to stderr; stdout is reserved for the report. Log
/// records from the library are routed through the same subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Check if JSON output is requested
    let use_json = std::env::var("SCHEDSIM_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::FULL),
            )
            .init();
        debug!("Structured tracing initialized with JSON output");
    } else {
        // Human-readable output for development
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        debug!("Structured tracing initialized");
    }
}

/// Span covering one policy run with structured fields
pub struct RunSpan {
    _span: tracing::Span,
    start: Instant,
}

impl RunSpan {
    pub fn new(policy: &str) -> Self {
        let span = span!(
            Level::DEBUG,
            "policy_run",
            policy = policy,
            duration_us = tracing::field::Empty,
            processes = tracing::field::Empty,
        );

        let _entered = span.enter();
        debug!(policy = policy, "policy run started");
        drop(_entered);

        Self {
            _span: span,
            start: Instant::now(),
        }
    }

    /// Record how many processes the run dispatched
    pub fn record_processes(&self, count: usize) {
        self._span.record("processes", count);
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self._span.enter();
        self._span.record("duration_us", duration.as_micros() as u64);
        debug!(
            duration_us = duration.as_micros() as u64,
            "policy run completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test_tracing() {
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new("debug"))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    }

    #[test]
    fn test_run_span_records_fields() {
        init_test_tracing();

        let span = RunSpan::new("fcfs");
        span.record_processes(4);
        // Span is dropped and logged with its duration
    }
}
