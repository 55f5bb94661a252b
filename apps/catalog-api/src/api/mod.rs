//! Route composition for the catalog service.

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Everything that lives under `/api` (the prefix itself comes from
/// `create_router`).
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// `/ready` with state applied, merged into the app next to `/health`.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
