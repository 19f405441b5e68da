//! Console error types

use inventory_validation::{RecordErrors, ValidationError};
use thiserror::Error;

/// Result type for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    #[error("No record with employee number '{0}'")]
    NotFound(String),

    #[error("Employee number '{0}' is already assigned")]
    DuplicateEmployee(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] RecordErrors),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Field-level errors, when the failure came from record validation
    pub fn record_errors(&self) -> Option<&RecordErrors> {
        match self {
            ConsoleError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
