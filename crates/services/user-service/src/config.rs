//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Database connection and pool settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// The database URL is taken from `USER_SERVICE_DATABASE_URL` or
    /// `DATABASE_URL`, falling back to one assembled from the `DB_*` parts.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();
        let url = env::var("USER_SERVICE_DATABASE_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| DatabaseUrlParts::from_env().to_url());

        Self {
            database: DatabaseConfig {
                url,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}

/// Postgres connection parts read from `DB_HOST`, `DB_PORT`, `DB_NAME`,
/// `DB_USER` and `DB_PASSWORD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrlParts {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DatabaseUrlParts {
    pub fn from_env() -> Self {
        Self {
            host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5432),
            name: env::var("DB_NAME").unwrap_or_else(|_| "user_db".to_string()),
            user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string()),
        }
    }

    pub fn to_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode=disable",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
