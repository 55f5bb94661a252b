//! Shared scaffolding for the workspace's Axum services.
//!
//! [`server`] builds the app (documented router, CORS, security headers,
//! graceful shutdown, readiness probes), [`errors`] defines the uniform
//! error body and its codes, and [`extractors`] adds request extractors
//! that reject through that same error shape. [`http`] holds the
//! middleware the server wires in.
//!
//! A service hands its routes and an OpenAPI doc to [`create_router`],
//! then runs the result with [`create_production_app`]:
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = create_router::<ApiDoc>(Router::new()).await?;
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{IdPath, ValidatedJson};
pub use http::security_headers;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};
