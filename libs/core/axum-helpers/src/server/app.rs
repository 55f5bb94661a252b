use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, error, info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Assembles the service router: API routes under `/api`, interactive docs,
/// and the cross-cutting middleware stack.
///
/// Mounts Swagger UI at `/swagger-ui`, Redoc at `/redoc`, RapiDoc at
/// `/rapidoc` and Scalar at `/scalar`, all backed by the OpenAPI document of
/// `T`. Unmatched routes fall through to a JSON 404. Request tracing,
/// security headers, CORS and response compression wrap the whole router.
///
/// Liveness and readiness endpoints are not included here; merge them in the
/// app with `health_router` and a service-specific ready router so they stay
/// outside `/api`.
///
/// # Errors
/// CORS is mandatory: fails when `CORS_ALLOWED_ORIGIN` is unset, empty, or
/// holds a value that is not a valid header value.
///
/// # Example
/// ```ignore
/// use axum_helpers::create_router;
///
/// let api_routes = Router::new().nest("/products", products_router);
/// let app = create_router::<ApiDoc>(api_routes).await?;
/// ```
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = cors_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated
/// origins, no default).
///
/// Allows the usual REST methods plus OPTIONS, credentialed requests, and a
/// small header set including `x-csrf-token`; preflight results may be
/// cached for an hour.
fn cors_from_env() -> io::Result<CorsLayer> {
    let invalid = |message: String| io::Error::new(io::ErrorKind::InvalidInput, message);

    let raw = std::env::var("CORS_ALLOWED_ORIGIN").map_err(|_| {
        invalid(
            "CORS_ALLOWED_ORIGIN is required, e.g. \
             CORS_ALLOWED_ORIGIN=http://localhost:3000,https://example.com"
                .to_string(),
        )
    })?;

    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e)))?;

    if origins.is_empty() {
        return Err(invalid("CORS_ALLOWED_ORIGIN cannot be empty".to_string()));
    }

    info!("CORS allows origins: {}", raw);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::COOKIE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

/// Binds the listener and serves `router` until SIGTERM/SIGINT, then runs
/// `cleanup` with a deadline before returning.
///
/// Shutdown path: the signal flips the `ShutdownCoordinator`, axum stops
/// accepting connections and drains in-flight requests, and the cleanup
/// future (closing database pools and the like) gets `shutdown_timeout` to
/// finish.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::create_production_app;
///
/// create_production_app(app, &config.server, Duration::from_secs(30), async move {
///     let _ = state.db.close().await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let on_shutdown = coordinator.clone();
    let cleanup_task = tokio::spawn(async move {
        on_shutdown.wait_for_signal().await;

        info!("Running cleanup (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup complete"),
            Err(_) => warn!("Cleanup did not finish within {:?}", shutdown_timeout),
        }
    });

    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await
        .inspect_err(|e| error!("Server error: {:?}", e));

    // Let cleanup run before the process exits
    cleanup_task.await.ok();

    served
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_requires_origin_env() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", None::<&str>, || {
            assert!(cors_from_env().is_err());
        });
    }

    #[test]
    fn test_cors_accepts_origin_list() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000, https://example.com"),
            || {
                assert!(cors_from_env().is_ok());
            },
        );
    }

    #[test]
    fn test_cors_rejects_blank_value() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            assert!(cors_from_env().is_err());
        });
    }
}
