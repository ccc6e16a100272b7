//! Route registry.
//!
//! # Responsibilities
//! - Attach the fixed endpoint set to a fresh Router
//! - Root health check for load-balancer probes
//! - Versioned liveness check under the configured API prefix
//!
//! # Design Decisions
//! - Handlers never touch downstream services; they only prove the
//!   process is up and routing
//! - The two health routes return different bodies so tests can verify
//!   they are independently registered

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Body of the root health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body of the versioned liveness check.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    pub service: String,
}

/// Build a router with all service routes attached.
pub fn register_routes(state: AppState) -> Router {
    let api = Router::new().route("/ping", get(ping));

    Router::new()
        .route("/", get(healthcheck))
        .nest(&state.settings.api_prefix, api)
        .with_state(state)
}

/// Root health check. No dependency on downstream services.
async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Liveness check, distinct from the root health check.
async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        service: state.settings.service_name.clone(),
    })
}
