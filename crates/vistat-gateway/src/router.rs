//! Axum router wiring.
//!
//! Exposes the visit endpoint and the Prometheus metrics endpoint.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/visitors", get(handlers::visitors))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
}
