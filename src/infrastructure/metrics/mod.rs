//! Prometheus Metrics Module
//!
//! Provides application-wide metrics collection using Prometheus.
//!
//! # Metrics Collected
//! - HTTP request counts by method, matched route, and status
//! - HTTP request latency histograms
//! - Catalog records created, by collection
//! - Budgets created and the distribution of their totals

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};

use crate::domain::CatalogKind;

const NAMESPACE: &str = "distribution_budget";

/// Global metrics registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// HTTP request counter - tracks total requests by method, path, and status code
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests").namespace(NAMESPACE),
        &["method", "path", "status"],
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric")
});

/// HTTP request latency histogram - tracks request duration in seconds
pub static HTTP_REQUEST_DURATION_SECONDS: Lazy<HistogramVec> = Lazy::new(|| {
    let buckets = vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];
    HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        )
        .namespace(NAMESPACE)
        .buckets(buckets),
        &["method", "path"],
    )
    .expect("Failed to create HTTP_REQUEST_DURATION_SECONDS metric")
});

/// Catalog records created, labelled by collection
pub static CATALOG_ITEMS_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("catalog_items_created_total", "Catalog records created")
            .namespace(NAMESPACE),
        &["kind"],
    )
    .expect("Failed to create CATALOG_ITEMS_CREATED_TOTAL metric")
});

pub static BUDGETS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(
        Opts::new("budgets_created_total", "Budgets created").namespace(NAMESPACE),
    )
    .expect("Failed to create BUDGETS_CREATED_TOTAL metric")
});

/// Distribution of budget totals (before BDI)
pub static BUDGET_TOTAL_VALUE: Lazy<Histogram> = Lazy::new(|| {
    let buckets = vec![
        1_000.0, 5_000.0, 10_000.0, 50_000.0, 100_000.0, 500_000.0, 1_000_000.0,
    ];
    Histogram::with_opts(
        HistogramOpts::new("budget_total_value", "Budget total value")
            .namespace(NAMESPACE)
            .buckets(buckets),
    )
    .expect("Failed to create BUDGET_TOTAL_VALUE metric")
});

/// Register all metrics with the registry
fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("Failed to register HTTP_REQUESTS_TOTAL");
    registry
        .register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()))
        .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");
    registry
        .register(Box::new(CATALOG_ITEMS_CREATED_TOTAL.clone()))
        .expect("Failed to register CATALOG_ITEMS_CREATED_TOTAL");
    registry
        .register(Box::new(BUDGETS_CREATED_TOTAL.clone()))
        .expect("Failed to register BUDGETS_CREATED_TOTAL");
    registry
        .register(Box::new(BUDGET_TOTAL_VALUE.clone()))
        .expect("Failed to register BUDGET_TOTAL_VALUE");
}

/// Collect and encode all metrics as Prometheus text format.
///
/// Encoding failures are logged and yield an empty body.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Helper to record HTTP request metrics
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let status = status.to_string();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, status.as_str()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration_secs);
}

pub fn record_catalog_created(kind: CatalogKind) {
    CATALOG_ITEMS_CREATED_TOTAL
        .with_label_values(&[kind.as_str()])
        .inc();
}

pub fn record_budget_created(total: f64) {
    BUDGETS_CREATED_TOTAL.inc();
    BUDGET_TOTAL_VALUE.observe(total);
}
