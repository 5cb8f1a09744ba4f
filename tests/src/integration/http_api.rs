//! HTTP API integration tests.
//!
//! Drives the fully assembled router with `tower::ServiceExt::oneshot`
//! against a pinned clock, asserting status codes, redirect targets, and
//! the exact JSON wire contract consumed by the front end.

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use chrono::{DateTime, TimeDelta, Utc};
    use countdown_core::FixedClock;
    use countdown_gateway::{GatewayConfig, GatewayService};
    use std::sync::Arc;
    use tower::ServiceExt;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn utc(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    /// Router and pinned clock for a service frozen at the given instant.
    fn router_at(rfc3339: &str) -> (Router, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(utc(rfc3339)));
        let service = GatewayService::with_clock(GatewayConfig::default(), clock.clone())
            .expect("default config is valid");
        (service.build_router(), clock)
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(
                        header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        (status, location)
    }

    // =========================================================================
    // READ ENDPOINTS
    // =========================================================================

    #[tokio::test]
    async fn test_index_serves_html() {
        let (app, _) = router_at("2024-07-20T12:00:00Z");

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<title>New Year Countdown</title>"));
    }

    #[tokio::test]
    async fn test_current_datetime_wire_fields() {
        let (app, _) = router_at("2024-07-20T13:05:09Z");

        let (status, json) = get_json(&app, "/api/current_datetime_now").await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(json["time_now"], "\u{1f550}01:05:09 PM");
        assert_eq!(json["date_now"], "\u{1f4c6}2024-07-20");
        assert_eq!(json["month_name_now"], "\u{2600}\u{fe0f}July");
        assert_eq!(json["day_of_week_now"], "Saturday");
    }

    #[tokio::test]
    async fn test_time_of_year_style_in_summer() {
        let (app, _) = router_at("2024-07-20T12:00:00Z");

        let (status, json) = get_json(&app, "/api/time_of_year_style").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["primary_color"], "#6cff03");
        assert_eq!(json["secondary_color"], "#58d102");
    }

    #[tokio::test]
    async fn test_style_tracks_month_change() {
        let (app, clock) = router_at("2024-11-30T23:59:59Z");

        let (_, autumn) = get_json(&app, "/api/time_of_year_style").await;
        assert_eq!(autumn["primary_color"], "#ff8903");

        clock.advance(TimeDelta::seconds(1));
        let (_, december) = get_json(&app, "/api/time_of_year_style").await;
        assert_eq!(december["primary_color"], "#73d5ff");
    }

    #[tokio::test]
    async fn test_countdown_wire_fields() {
        let (app, _) = router_at("2024-12-31T23:59:59Z");

        let (status, json) = get_json(&app, "/api/countdown_timer_until_new_year_data").await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(json["days_left"], 0);
        assert_eq!(json["hours_left"], 0);
        assert_eq!(json["minutes_left"], 0);
        assert_eq!(json["seconds_left"], 1);
        // new_year is a string on the wire.
        assert_eq!(json["new_year"], "2025");
    }

    #[tokio::test]
    async fn test_new_year_arrival_fires_once() {
        let (app, clock) = router_at("2024-12-31T23:59:59Z");

        let (_, before) = get_json(&app, "/api/is_new_year_arrived_state").await;
        assert_eq!(before["is_new_year_arrived"], "false");

        clock.advance(TimeDelta::seconds(1));
        let (_, first) = get_json(&app, "/api/is_new_year_arrived_state").await;
        assert_eq!(first["is_new_year_arrived"], "true");

        let (_, second) = get_json(&app, "/api/is_new_year_arrived_state").await;
        assert_eq!(second["is_new_year_arrived"], "false");

        // The countdown now reports the next tracked year.
        let (_, countdown) = get_json(&app, "/api/countdown_timer_until_new_year_data").await;
        assert_eq!(countdown["new_year"], "2026");
    }

    // =========================================================================
    // SETTINGS FORMS
    // =========================================================================

    #[tokio::test]
    async fn test_set_time_format_switches_display() {
        let (app, _) = router_at("2024-07-20T13:00:00Z");

        let (status, location) = post_form(&app, "/set_time_format", "time_format=24h").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/"));

        let (_, json) = get_json(&app, "/api/current_datetime_now").await;
        assert_eq!(json["time_now"], "\u{1f550}13:00:00");

        let (_, _) = post_form(&app, "/set_time_format", "time_format=pm").await;
        let (_, json) = get_json(&app, "/api/current_datetime_now").await;
        assert_eq!(json["time_now"], "\u{1f550}01:00:00 PM");
    }

    #[tokio::test]
    async fn test_set_time_zone_shifts_views() {
        let (app, _) = router_at("2024-12-31T23:00:00Z");

        let (status, location) = post_form(&app, "/set_time_zone", "time_zone=2").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/"));

        // Offset wall clock has crossed midnight into 2025.
        let (_, json) = get_json(&app, "/api/current_datetime_now").await;
        assert_eq!(json["date_now"], "\u{1f4c6}2025-01-01");

        let (_, countdown) = get_json(&app, "/api/countdown_timer_until_new_year_data").await;
        assert_eq!(countdown["days_left"], 364);
        assert_eq!(countdown["hours_left"], 23);
    }

    #[tokio::test]
    async fn test_missing_form_fields_are_noops() {
        let (app, _) = router_at("2024-07-20T13:00:00Z");

        let (status, location) = post_form(&app, "/set_time_format", "").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/"));

        let (status, _) = post_form(&app, "/set_time_zone", "time_zone=abc").await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        // Defaults untouched: 12-hour display, zero offset.
        let (_, json) = get_json(&app, "/api/current_datetime_now").await;
        assert_eq!(json["time_now"], "\u{1f550}01:00:00 PM");
        assert_eq!(json["date_now"], "\u{1f4c6}2024-07-20");
    }

    // =========================================================================
    // OPS ENDPOINTS
    // =========================================================================

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _) = router_at("2024-07-20T12:00:00Z");

        let (status, json) = get_json(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_metrics_count_requests() {
        let (app, _) = router_at("2024-07-20T12:00:00Z");

        get_json(&app, "/api/current_datetime_now").await;
        get_json(&app, "/api/current_datetime_now").await;
        get_json(&app, "/api/time_of_year_style").await;

        let (status, json) = get_json(&app, "/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["requests"]["total"], 3);
        assert_eq!(json["requests"]["datetime"], 2);
        assert_eq!(json["requests"]["style"], 1);
    }

    #[tokio::test]
    async fn test_cross_origin_request_gets_cors_headers() {
        // Exercises the full middleware stack (trace wrapping CORS
        // wrapping the routes) on a real cross-origin request.
        let (app, _) = router_at("2024-07-20T12:00:00Z");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/current_datetime_now")
                    .header(header::ORIGIN, "http://localhost:9000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _) = router_at("2024-07-20T12:00:00Z");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/no_such_endpoint")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
