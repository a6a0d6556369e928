//! Statistics endpoints.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::catalog::Region;
use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;

pub async fn overall_stats(State(state): State<AppState>) -> Response {
    ApiResponse::ok(state.engine.stats()).into_response()
}

pub async fn region_stats(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Response, ApiError> {
    let region: Region = region.parse().map_err(|_| ApiError::InvalidRegion)?;
    Ok(ApiResponse::ok(state.engine.region_stats(region)).into_response())
}
