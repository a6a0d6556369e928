//! University endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, PageRequest, SearchFilter, Selection, Sort, SortOrder, University};
use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;

/// Search request body, as sent by the web frontend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub search_query: String,
    /// Category, or `""`/`"all"` for any. Unknown values match nothing.
    pub selected_type: String,
    /// Region, or `""`/`"all"` for any. Unknown values match nothing.
    pub selected_region: String,
    pub filter_by_fees: Option<i64>,
    pub filter_by_grade: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// A validated search: what to match, how to order it, which page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub filter: SearchFilter,
    pub sort: Option<Sort>,
    pub page: PageRequest,
}

fn selected(value: &str) -> Option<&str> {
    match value {
        "" | "all" => None,
        other => Some(other),
    }
}

impl TryFrom<SearchParams> for SearchRequest {
    type Error = ApiError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let category = selected(&params.selected_type).map(Selection::parse);
        let region = selected(&params.selected_region).map(Selection::parse);

        let sort = match params.sort_by.as_deref().filter(|s| !s.is_empty()) {
            Some(key) => {
                let key = key.parse().map_err(ApiError::InvalidRequest)?;
                let order = match params.sort_order.as_deref().filter(|s| !s.is_empty()) {
                    Some(order) => order.parse().map_err(ApiError::InvalidRequest)?,
                    None => SortOrder::default(),
                };
                Some(Sort { key, order })
            }
            None => None,
        };

        let query = Some(params.search_query).filter(|q| !q.is_empty());

        Ok(Self {
            filter: SearchFilter {
                category,
                region,
                max_fees: params.filter_by_fees,
                max_grade: params.filter_by_grade,
                query,
            },
            sort,
            page: PageRequest::new(params.page, params.page_size),
        })
    }
}

/// Search response payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<'a> {
    pub universities: Vec<&'a University>,
    pub total: usize,
    pub query: &'a str,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

pub async fn list_universities(State(state): State<AppState>) -> Response {
    ApiResponse::ok(state.engine.all()).into_response()
}

pub async fn get_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let university = state
        .engine
        .get_by_id(&id)
        .ok_or(ApiError::UniversityNotFound)?;
    Ok(ApiResponse::ok(university).into_response())
}

pub async fn universities_by_type(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response, ApiError> {
    let category: Category = category.parse().map_err(|_| ApiError::InvalidType)?;
    Ok(ApiResponse::ok(state.engine.by_category(category)).into_response())
}

pub async fn search_universities(
    State(state): State<AppState>,
    payload: Result<Json<SearchParams>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(params) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let query = params.search_query.clone();
    let request = SearchRequest::try_from(params)?;

    let page = state
        .engine
        .search_page(&request.filter, request.sort, request.page);

    tracing::debug!(
        query = %query,
        total = page.total,
        page = page.page,
        "Search completed"
    );

    let response = SearchResponse {
        universities: page.items,
        total: page.total,
        query: &query,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
    };
    Ok(ApiResponse::ok(response).into_response())
}
