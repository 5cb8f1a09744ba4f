//! Request counters exported as JSON at `/metrics`.

use std::sync::atomic::{AtomicU64, Ordering};

/// Gateway request metrics
#[derive(Default)]
pub struct GatewayMetrics {
    /// Counted API requests and applied settings updates. The index page,
    /// static assets, and the ops endpoints themselves are not counted.
    pub requests_total: AtomicU64,

    // Per-endpoint counters
    pub datetime_requests: AtomicU64,
    pub style_requests: AtomicU64,
    pub countdown_requests: AtomicU64,
    pub new_year_checks: AtomicU64,

    /// Settings actually applied (no-op form posts are not counted)
    pub settings_updates: AtomicU64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a datetime snapshot request
    pub fn record_datetime(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.datetime_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a season style request
    pub fn record_style(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.style_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a countdown request
    pub fn record_countdown(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.countdown_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a new-year arrival check
    pub fn record_new_year_check(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.new_year_checks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an applied settings change
    pub fn record_settings_update(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.settings_updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Export metrics as a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "requests": {
                "total": self.requests_total.load(Ordering::Relaxed),
                "datetime": self.datetime_requests.load(Ordering::Relaxed),
                "style": self.style_requests.load(Ordering::Relaxed),
                "countdown": self.countdown_requests.load(Ordering::Relaxed),
                "new_year_checks": self.new_year_checks.load(Ordering::Relaxed),
            },
            "settings_updates": self.settings_updates.load(Ordering::Relaxed),
        })
    }
}
