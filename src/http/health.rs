//! Liveness endpoint.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    /// RFC 3339, UTC, whole seconds.
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub universities: usize,
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthStatus {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        universities: state.engine.dataset().len(),
    };

    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(body),
    )
}
