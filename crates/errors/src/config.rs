//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        Some("Fix the command line value and retry.")
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { .. } => Some("config.missing_field"),
            Self::InvalidValue { .. } => Some("config.invalid_value"),
        }
    }
}
