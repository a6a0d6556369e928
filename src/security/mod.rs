//! Security subsystem.
//!
//! # Components
//! - cors.rs: which browser origins may call the API
//! - headers.rs: hardening headers on every response
//!
//! Request size limits are applied in the HTTP server from
//! `SecurityConfig::max_body_size`.

pub mod cors;
pub mod headers;
