#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for the cstore content store validator
//!
//! Errors are grouped by domain. Database failures are fatal for a run and
//! travel as [`Error`]. Filesystem conditions are recorded against
//! individual content records as [`StorageError`].

use std::borrow::Cow;

use thiserror::Error;

pub mod config;
pub mod state;
pub mod storage;

pub use config::ConfigError;
pub use state::StateError;
pub use storage::StorageError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("state error: {0}")]
    State(#[from] StateError),
}

/// Minimal interface for rendering user-facing error information.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Stable error code for structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::State(err) => err.user_message(),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::State(err) => err.user_hint(),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::State(err) => err.user_code(),
        }
    }
}
