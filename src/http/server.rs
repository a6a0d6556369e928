//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers under `/api/v1`
//! - Wire up middleware (tracing, request ID, timeout, body limit, CORS,
//!   security headers, metrics)
//! - Serve on a listener until the shutdown signal fires

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::{Dataset, QueryEngine};
use crate::config::ServiceConfig;
use crate::http::faculties::{get_faculty, list_faculties};
use crate::http::health::health;
use crate::http::request::{request_id, MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::ApiError;
use crate::http::stats::{overall_stats, region_stats};
use crate::http::universities::{
    get_university, list_universities, search_universities, universities_by_type,
};
use crate::observability::metrics;
use crate::security;

pub const API_PREFIX: &str = "/api/v1";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: QueryEngine,
    pub started_at: Instant,
}

/// HTTP server for the catalog API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `dataset`.
    pub fn new(config: ServiceConfig, dataset: Arc<Dataset>) -> Self {
        let state = AppState {
            engine: QueryEngine::new(dataset),
            started_at: Instant::now(),
        };

        Self {
            router: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/health", get(health))
            .route("/universities", get(list_universities))
            .route("/universities/search", post(search_universities))
            .route("/universities/type/{category}", get(universities_by_type))
            .route("/universities/{id}", get(get_university))
            .route("/stats", get(overall_stats))
            .route("/stats/region/{region}", get(region_stats))
            .route("/faculties", get(list_faculties))
            .route("/faculties/{id}", get(get_faculty))
            .route_layer(middleware::from_fn(metrics::track_requests));

        let router = Router::new()
            .nest(API_PREFIX, api)
            .fallback(route_not_found)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(security::cors::cors_layer(&config.cors));

        security::headers::apply(router, &config.security).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = request_id(request).unwrap_or("unknown"),
                    )
                }))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        )
    }

    #[cfg(test)]
    fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
