#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration for the cstore validator
//!
//! Settings come from hard-coded defaults overridden by CLI flags. There is
//! no configuration file and no environment layer.

pub mod constants;

use cstore_errors::ConfigError;
use std::fmt;
use std::path::PathBuf;

/// Database connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub username: String,
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
            dbname: constants::DEFAULT_DBNAME.to_string(),
            username: constants::DEFAULT_USERNAME.to_string(),
            password: constants::DEFAULT_PASSWORD.to_string(),
        }
    }
}

// Password stays out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    /// Root directory of the file content store
    pub content_store: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            content_store: PathBuf::from(constants::DEFAULT_CONTENT_STORE),
        }
    }
}

impl Config {
    /// Check the settings before anything touches the database
    ///
    /// # Errors
    ///
    /// Returns an error if a required value is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("host", self.database.host.as_str()),
            ("dbname", self.database.dbname.as_str()),
            ("username", self.database.username.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        if self.database.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                value: "0".to_string(),
            });
        }

        if self.content_store.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "contentstore".to_string(),
            });
        }

        if !self.content_store.is_dir() {
            tracing::warn!(
                content_store = %self.content_store.display(),
                "content store root is not a directory, every record will be reported as orphan"
            );
        }

        Ok(())
    }
}
