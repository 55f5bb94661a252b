//! App-level configuration assembled from the shared config crate.

use core_config::{AppInfo, FromEnv, app_info, database::DatabaseConfig, server::ServerConfig};

pub use core_config::Environment;

/// Everything the service reads from the environment, loaded once at boot.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
