//! State shared across request handlers.

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Cloned into every route; the connection is an internal pool handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
