//! Seeder configuration management
//!
//! Configuration is read from environment variables (after loading an optional
//! `.env` file). Every variable has a fallback in [`crate::constants`].

use std::env;
use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

use crate::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PASS, DEFAULT_DB_PORT, DEFAULT_DB_USER,
    DEFAULT_ORGANIZER_EMAIL,
};

/// Main seeder configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
}

/// Database connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

/// Seeding settings
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Email of the user recorded as creator of every inserted problem
    pub organizer_email: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`; unset and empty values both
    /// take the fallback
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Ok(Self {
            database: DatabaseConfig::from_vars(&var)?,
            seed: SeedConfig::from_vars(&var),
        })
    }
}

impl DatabaseConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port: parse_port(var("DB_PORT").as_deref())?,
            user: var("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: var("DB_PASS").unwrap_or_else(|| DEFAULT_DB_PASS.to_string()),
            name: var("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        })
    }

    /// Build sqlx connect options from these settings
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

impl SeedConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            organizer_email: var("ORGANIZER_EMAIL")
                .unwrap_or_else(|| DEFAULT_ORGANIZER_EMAIL.to_string()),
        }
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(DEFAULT_DB_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DB_PORT".to_string())),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
