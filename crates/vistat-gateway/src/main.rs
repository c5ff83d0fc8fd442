//! vistat Gateway
//!
//! Focus: visit counting & active-visitor tracking
//! - Visit endpoint: GET /v1/visitors
//! - Per-request flow: resolve client id -> upsert -> sweep -> count
//! - Strict YAML config, tracing via env filter

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use vistat_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("vistat.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state build failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "vistat-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
