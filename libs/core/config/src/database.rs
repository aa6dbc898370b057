use crate::{ConfigError, FromEnv, env_optional, env_parse_or, env_required};
use std::time::Duration;

/// PostgreSQL connection pool configuration
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn new(url: String) -> Self {
        Self {
            url,
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
            run_migrations: true,
        }
    }

    /// Loads the configuration only when `DATABASE_URL` is set.
    ///
    /// `Ok(None)` means the service should run without a database.
    pub fn from_env_optional() -> Result<Option<Self>, ConfigError> {
        match env_optional("DATABASE_URL") {
            Some(_) => Self::from_env().map(Some),
            None => Ok(None),
        }
    }
}

impl FromEnv for DatabaseConfig {
    /// Reads:
    /// - DATABASE_URL (required)
    /// - DB_MAX_CONNECTIONS (default 10)
    /// - DB_MIN_CONNECTIONS (default 1)
    /// - DB_CONNECT_TIMEOUT_SECS (default 8)
    /// - RUN_MIGRATIONS (default true)
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::new(env_required("DATABASE_URL")?);

        let max_connections = env_parse_or("DB_MAX_CONNECTIONS", defaults.max_connections)?;
        let min_connections = env_parse_or("DB_MIN_CONNECTIONS", defaults.min_connections)?;
        if min_connections > max_connections {
            return Err(ConfigError::ParseError {
                key: "DB_MIN_CONNECTIONS".to_string(),
                details: format!(
                    "{} exceeds DB_MAX_CONNECTIONS ({})",
                    min_connections, max_connections
                ),
            });
        }

        Ok(Self {
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(env_parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )?),
            run_migrations: env_parse_or("RUN_MIGRATIONS", defaults.run_migrations)?,
            ..defaults
        })
    }
}
