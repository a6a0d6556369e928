//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add request ID)
//!     → universities.rs / stats.rs / faculties.rs / health.rs (handlers)
//!     → catalog::QueryEngine (read-only queries)
//!     → response.rs (success / error envelope)
//!     → Send to client
//! ```

pub mod faculties;
pub mod health;
pub mod request;
pub mod response;
pub mod server;
pub mod stats;
pub mod universities;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::{ApiError, ApiResponse, ErrorBody};
pub use server::{AppState, HttpServer, API_PREFIX};
