//! University Catalog Service Library

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use catalog::{Dataset, QueryEngine};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
