//! HTTP handlers.
//!
//! The visit endpoint degrades instead of failing: store trouble yields a
//! zeroed body with an `error` field, and the resolved client id is echoed
//! back on every response so callers can reuse it.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use vistat_core::error::VistatError;
use vistat_core::visitor::VisitSnapshot;

use crate::app_state::AppState;
use crate::identity::{self, CLIENT_ID_HEADER};
use crate::visits;

/// Request header opting into a counter increment under the
/// `when_requested` policy.
pub const UPDATE_TOTAL_HEADER: &str = "x-update-total";

fn json_response(status: StatusCode, client_id: &str, body: String) -> Response {
    (
        status,
        [
            ("content-type", "application/json"),
            (CLIENT_ID_HEADER, client_id),
            ("access-control-allow-origin", "*"),
        ],
        body,
    )
        .into_response()
}

fn visit_ok_json(snap: &VisitSnapshot) -> String {
    json!({
        "totalVisits": snap.total_visits,
        "activeUsers": snap.active_users,
        "clientId": snap.client_id,
    })
    .to_string()
}

fn visit_degraded_json(err: &VistatError) -> String {
    json!({
        "error": err.to_string(),
        "totalVisits": 0,
        "activeUsers": 0,
    })
    .to_string()
}

fn degraded(err: &VistatError, client_id: &str) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    json_response(status, client_id, visit_degraded_json(err))
}

/// `GET /v1/visitors` — record a visit and report counters.
pub async fn visitors(State(app): State<AppState>, headers: HeaderMap) -> Response {
    let client_id = identity::resolve_client_id(&headers);
    let update_requested = headers
        .get(UPDATE_TOTAL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let Some(store) = app.store() else {
        app.note_store_unconfigured();
        app.metrics()
            .http_requests
            .inc(&[("outcome", "unconfigured")]);
        return degraded(&VistatError::StoreUnconfigured, &client_id);
    };

    let tracking = &app.cfg().tracking;
    match visits::record_visit(
        store.as_ref(),
        tracking.count_policy,
        &client_id,
        update_requested,
        visits::now_ms(),
        tracking.inactivity_threshold_ms,
    )
    .await
    {
        Ok(snap) => {
            app.metrics().http_requests.inc(&[("outcome", "ok")]);
            json_response(StatusCode::OK, &client_id, visit_ok_json(&snap))
        }
        Err(e) => {
            tracing::error!(error = %e, client_id = %client_id, "visit recording failed");
            app.metrics().http_requests.inc(&[("outcome", "error")]);
            app.metrics()
                .store_errors
                .inc(&[("code", e.client_code().as_str())]);
            degraded(&e, &client_id)
        }
    }
}

/// `GET /metrics` — Prometheus text exposition.
pub async fn metrics(State(app): State<AppState>) -> Response {
    let (mut total, mut active) = (0, 0);
    if let Some(store) = app.store() {
        total = store.total_visits().await.unwrap_or(0);
        active = store.active_count().await.unwrap_or(0);
    }

    let body = app.metrics().render(&[
        ("vistat_visits_total", total),
        ("vistat_active_visitors", active),
    ]);

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        body,
    )
        .into_response()
}
