//! # marquee-api
//!
//! HTTP composition layer for the Marquee movie awards registry.
//!
//! This crate provides the read-only API surface:
//!
//! - **Routing**: movie list, detail, and award-interval endpoints
//! - **Configuration**: environment-driven server settings
//! - **Error Mapping**: domain errors to stable HTTP error bodies
//! - **Observability**: request tracing and health checks
//!
//! ## Design Principles
//!
//! This crate is a **thin composition layer** with no domain policy.
//! All business logic lives in `marquee-core`.
//!
//! ## Endpoints
//!
//! ```text
//! GET /health                                - Health check
//! GET /ready                                 - Readiness check
//! GET /openapi.json                          - OpenAPI specification
//! GET /movies/                               - Paginated movie list (+search)
//! GET /movies/{id}/                          - Movie detail
//! GET /movies/awards-interval-by-producer/   - Producer win-interval extremes
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use marquee_api::server::Server;
//!
//! let server = Server::builder()
//!     .http_port(8080)
//!     .build();
//!
//! server.serve().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod server;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::server::Server;
}
