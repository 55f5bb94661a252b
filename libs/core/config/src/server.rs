use crate::{ConfigError, FromEnv, env_or_default};
use std::net::Ipv4Addr;

/// Bind address for the HTTP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// "host:port", as handed to the TCP listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` defaults to 0.0.0.0 (all interfaces), `PORT` to 8080. A
    /// non-numeric or out-of-range `PORT` is a hard error rather than a
    /// silent fallback.
    fn from_env() -> Result<Self, ConfigError> {
        let port = env_or_default("PORT", "8080");
        let port = port.parse::<u16>().map_err(|e| ConfigError::ParseError {
            key: "PORT".to_string(),
            details: e.to_string(),
        })?;

        Ok(Self {
            host: env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string()),
            port,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}
