//! Route table and request handlers.
//!
//! Handlers are thin: take the appropriate lock on the shared manager, call
//! one core operation, wrap the result in a wire response. Write access
//! (settings and the arrival check) goes through the write lock, which
//! serializes the tracked-year read-modify-write across concurrent requests.

use crate::config::GatewayConfig;
use crate::metrics::GatewayMetrics;
use crate::middleware::create_cors_layer;
use crate::responses::{
    CountdownResponse, DatetimeNowResponse, NewYearArrivedResponse, TimeOfYearStyleResponse,
};
use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use countdown_core::DatetimeManager;
use parking_lot::RwLock;
use serde::Deserialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Index page, embedded so `/` works regardless of the static directory.
static INDEX_HTML: &str = include_str!("../static/index.html");

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<RwLock<DatetimeManager>>,
    pub metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Wrap a manager for sharing across handlers
    pub fn new(manager: DatetimeManager) -> Self {
        Self {
            manager: Arc::new(RwLock::new(manager)),
            metrics: Arc::new(GatewayMetrics::new()),
        }
    }
}

/// Assemble the full route table with CORS and tracing layers.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    // Trace outermost, CORS directly around the routes: Cors needs the
    // inner response body to implement Default, which the trace layer's
    // wrapped body does not.
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(&config.cors));

    Router::new()
        .route("/", get(index))
        .route("/set_time_format", post(set_time_format))
        .route("/set_time_zone", post(set_time_zone))
        .route("/api/current_datetime_now", get(current_datetime_now))
        .route("/api/time_of_year_style", get(time_of_year_style))
        .route(
            "/api/countdown_timer_until_new_year_data",
            get(countdown_timer_data),
        )
        .route("/api/is_new_year_arrived_state", get(is_new_year_arrived_state))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_export))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(middleware)
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn current_datetime_now(State(state): State<AppState>) -> Json<DatetimeNowResponse> {
    state.metrics.record_datetime();
    let snapshot = state.manager.read().clock_snapshot();
    Json(snapshot.into())
}

async fn time_of_year_style(State(state): State<AppState>) -> Json<TimeOfYearStyleResponse> {
    state.metrics.record_style();
    let theme = state.manager.read().season_theme();
    Json(theme.into())
}

async fn countdown_timer_data(State(state): State<AppState>) -> Json<CountdownResponse> {
    state.metrics.record_countdown();
    let manager = state.manager.read();
    let countdown = manager.countdown();
    let new_year = manager.tracked_new_year();
    Json(CountdownResponse::new(countdown, new_year))
}

async fn is_new_year_arrived_state(
    State(state): State<AppState>,
) -> Json<NewYearArrivedResponse> {
    state.metrics.record_new_year_check();
    let arrived = state.manager.write().check_new_year_arrived();
    Json(NewYearArrivedResponse::new(arrived))
}

#[derive(Debug, Deserialize)]
struct SetTimeFormatForm {
    time_format: Option<String>,
}

/// `time_format=pm` selects 12-hour display; any other value selects
/// 24-hour. A missing or empty field is a no-op.
async fn set_time_format(
    State(state): State<AppState>,
    Form(form): Form<SetTimeFormatForm>,
) -> Redirect {
    if let Some(format) = form.time_format.filter(|f| !f.is_empty()) {
        state.manager.write().set_display_format(format == "pm");
        state.metrics.record_settings_update();
    }
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
struct SetTimeZoneForm {
    time_zone: Option<String>,
}

/// `time_zone` is a whole-hour offset. Missing, empty, or non-integer
/// values are a no-op.
async fn set_time_zone(
    State(state): State<AppState>,
    Form(form): Form<SetTimeZoneForm>,
) -> Redirect {
    if let Some(hours) = form.time_zone.and_then(|v| v.parse::<i32>().ok()) {
        state.manager.write().set_utc_offset(hours);
        state.metrics.record_settings_update();
    }
    Redirect::to("/")
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn metrics_export(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.metrics.to_json())
}
