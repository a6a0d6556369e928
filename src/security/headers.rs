//! Security response headers.
//!
//! # Design Decisions
//! - Headers are only set when the handler did not already set them
//! - Applied to every response, errors included

use axum::{
    http::{header, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::SecurityConfig;

/// Wrap `router` with hardening headers when enabled in config.
pub fn apply(router: Router, config: &SecurityConfig) -> Router {
    if !config.enable_headers {
        return router;
    }

    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
}
