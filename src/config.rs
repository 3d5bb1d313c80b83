//! Server configuration loaded from the environment.
//!
//! A `.env` file in the working directory is honoured when present. Every
//! setting has a default except `DATABASE_URL`; without it the server keeps
//! its data in memory.

use thiserror::Error;

const HOST_VAR: &str = "WORKBOARD_HOST";
const PORT_VAR: &str = "WORKBOARD_PORT";
const DATABASE_URL_VAR: &str = "DATABASE_URL";
const MAX_CONNECTIONS_VAR: &str = "WORKBOARD_DB_MAX_CONNECTIONS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while reading configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held a value that could not be parsed.
    #[error("{name} has invalid value '{value}'")]
    InvalidValue {
        /// Environment variable name.
        name: &'static str,
        /// Offending raw value.
        value: String,
    },
}

/// Runtime settings for the HTTP server and its storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// `PostgreSQL` connection URL; `None` selects in-memory storage.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Loads `.env` if present and reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a numeric setting does not
    /// parse or is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case outside development.
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a numeric setting does not
    /// parse or is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        Ok(Self {
            host: read(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_positive(PORT_VAR, read(PORT_VAR), DEFAULT_PORT)?,
            database_url: read(DATABASE_URL_VAR),
            db_max_connections: parse_positive(
                MAX_CONNECTIONS_VAR,
                read(MAX_CONNECTIONS_VAR),
                DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }

    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_positive<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.parse::<T>() {
        Ok(parsed) if parsed != T::default() => Ok(parsed),
        _ => Err(ConfigError::InvalidValue { name, value }),
    }
}
