//! Faculty endpoints.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;

pub async fn list_faculties(State(state): State<AppState>) -> Response {
    ApiResponse::ok(state.engine.faculties()).into_response()
}

/// Look a faculty up by slug, e.g. `computer-science`.
pub async fn get_faculty(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let name = state
        .engine
        .faculty_by_slug(&slug)
        .ok_or(ApiError::FacultyNotFound)?;
    Ok(ApiResponse::ok(name).into_response())
}
