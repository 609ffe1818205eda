//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `STORAGE_MODE` | `postgres` (or `in_memory`) |
//! | `DATABASE_URL` | built from the `DB_*` parts |
//! | `DB_HOST` | `localhost` |
//! | `DB_PORT` | `5432` |
//! | `DB_USER` | `postgres` |
//! | `DB_PASSWORD` | `admin` |
//! | `DB_NAME` | `todo_app` |
//! | `DB_POOL_SIZE` | `5` |

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

/// Port the server listens on.
pub const SERVER_PORT: u16 = 5000;

/// Base URL the client uses when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `STORAGE_MODE` names an unknown backend.
    #[error("invalid storage mode '{0}', expected 'postgres' or 'in_memory'")]
    InvalidStorageMode(String),
    /// A numeric variable could not be parsed.
    #[error("invalid value '{value}' for {variable}")]
    InvalidNumber {
        /// Variable name.
        variable: &'static str,
        /// Raw value found.
        value: String,
    },
}

/// Which repository backs the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    /// `PostgreSQL` through diesel.
    #[default]
    Postgres,
    /// Process-local map; contents are lost on exit.
    InMemory,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            _ => Err(ConfigError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Connection settings for the `PostgreSQL` backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// Full connection URL; takes precedence over the individual parts.
    pub url: Option<String>,
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Maximum pooled connections.
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_owned(),
            port: 5432,
            user: "postgres".to_owned(),
            password: "admin".to_owned(),
            name: "todo_app".to_owned(),
            pool_size: 5,
        }
    }
}

impl DatabaseSettings {
    /// Returns the connection URL.
    #[must_use]
    pub fn url(&self) -> String {
        self.url.clone().unwrap_or_else(|| {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            )
        })
    }
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerConfig {
    /// Selected storage backend.
    pub storage: StorageMode,
    /// `PostgreSQL` settings, used when `storage` is [`StorageMode::Postgres`].
    pub database: DatabaseSettings,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let defaults = DatabaseSettings::default();

        let storage = read("STORAGE_MODE")
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();

        let database = DatabaseSettings {
            url: read("DATABASE_URL"),
            host: read("DB_HOST").unwrap_or(defaults.host),
            port: parse_number("DB_PORT", read("DB_PORT"))?.unwrap_or(defaults.port),
            user: read("DB_USER").unwrap_or(defaults.user),
            password: read("DB_PASSWORD").unwrap_or(defaults.password),
            name: read("DB_NAME").unwrap_or(defaults.name),
            pool_size: parse_number("DB_POOL_SIZE", read("DB_POOL_SIZE"))?
                .unwrap_or(defaults.pool_size),
        };

        Ok(Self { storage, database })
    }

    /// Address the HTTP server binds to.
    #[must_use]
    pub fn listen_addr() -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, SERVER_PORT))
    }
}

fn parse_number<T: FromStr>(
    variable: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { variable, value })
    })
    .transpose()
}
