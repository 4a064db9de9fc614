//! Database error types

use std::borrow::Cow;
use std::fmt::Display;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum StateError {
    #[error("unable to connect to database {dbname} at {host}:{port}: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        dbname: String,
        message: String,
    },

    #[error("query {query} failed: {message}")]
    QueryFailed { query: String, message: String },

    #[error("qualifier {local_name} not found in namespace {namespace}")]
    QualifierNotFound {
        namespace: String,
        local_name: String,
    },

    #[error("store {store_id} referenced by node {node_uuid} not found")]
    StoreNotFound { store_id: i64, node_uuid: String },
}

impl StateError {
    /// Wrap a driver error raised while running the named query
    #[must_use]
    pub fn query_failed(query: &str, err: &impl Display) -> Self {
        Self::QueryFailed {
            query: query.to_string(),
            message: err.to_string(),
        }
    }
}

impl UserFacingError for StateError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ConnectionFailed { .. } => {
                Some("Check --host, --port, --dbname, --username and --password.")
            }
            Self::QualifierNotFound { .. } => {
                Some("The database does not look like a content repository schema.")
            }
            Self::StoreNotFound { .. } => Some("The store table is inconsistent with the nodes."),
            Self::QueryFailed { .. } => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ConnectionFailed { .. } => "state.connection_failed",
            Self::QueryFailed { .. } => "state.query_failed",
            Self::QualifierNotFound { .. } => "state.qualifier_not_found",
            Self::StoreNotFound { .. } => "state.store_not_found",
        };
        Some(code)
    }
}
