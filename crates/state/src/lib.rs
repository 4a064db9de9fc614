#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

//! Database access for cstore
//!
//! This crate connects to the repository's PostgreSQL database, reads the
//! content URL table and resolves content URLs back to their owning nodes.

pub mod catalog;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod resolver;

pub use catalog::ContentCatalog;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryCatalog;
pub use postgres::PostgresCatalog;
pub use resolver::IdentifierResolver;

use cstore_config::DatabaseConfig;
use cstore_errors::{Error, StateError};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

/// Open the database connection used for a whole validation run
///
/// A single attempt is made, so an unreachable database is reported with
/// the driver's own error before any query runs.
///
/// # Errors
///
/// Returns [`StateError::ConnectionFailed`] if the connection cannot be made.
pub async fn connect(config: &DatabaseConfig) -> Result<PgConnection, Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.dbname)
        .username(&config.username)
        .password(&config.password);

    tracing::debug!(
        host = %config.host,
        port = config.port,
        dbname = %config.dbname,
        username = %config.username,
        "connecting to database"
    );

    PgConnection::connect_with(&options)
        .await
        .map_err(|e| {
            StateError::ConnectionFailed {
                host: config.host.clone(),
                port: config.port,
                dbname: config.dbname.clone(),
                message: e.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn refused_connection_fails_once_with_driver_error() {
        let config = DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DatabaseConfig::default()
        };

        let start = Instant::now();
        let err = connect(&config).await.unwrap_err();
        assert!(start.elapsed() < Duration::from_secs(5));

        let Error::State(StateError::ConnectionFailed { port, message, .. }) = err else {
            panic!("expected connection failure, got {err:?}");
        };
        assert_eq!(port, 1);
        assert!(!message.contains("pool timed out"), "{message}");
    }
}
