//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },
}

impl CoreError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the offending field
    pub fn field(&self) -> &str {
        match self {
            CoreError::Validation { field, .. } => field,
        }
    }
}

/// Error returned when text can't be parsed into an identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid identifier: {0}")]
pub struct ParseIdError(pub String);
