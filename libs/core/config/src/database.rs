use crate::{ConfigError, FromEnv, env_required};

/// Connection settings for the service database.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl FromEnv for DatabaseConfig {
    /// `DATABASE_URL` is mandatory; there is no sensible default for it.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_database_url() {
        temp_env::with_var("DATABASE_URL", Some("postgres://localhost/catalog"), || {
            let config = DatabaseConfig::from_env().unwrap();
            assert_eq!(config.url, "postgres://localhost/catalog");
        });
    }

    #[test]
    fn test_missing_database_url_fails() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = DatabaseConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }
}
