//! Claims domain errors

use core_kernel::CoreError;
use thiserror::Error;

/// Errors that can occur in the claims domain
///
/// Lookups that find nothing are not errors; the store returns `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },
}

impl ClaimError {
    /// Returns the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ClaimError::Validation { field, .. } => field,
        }
    }
}

impl From<CoreError> for ClaimError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { field, message } => ClaimError::Validation { field, message },
        }
    }
}
