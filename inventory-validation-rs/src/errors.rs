//! Error handling for the validation library
//!
//! A single constraint failure is a [`ValidationError`]. Attached to the field
//! it came from it becomes a [`FieldError`], and the collect-all entry points
//! return every field failure of a record as [`RecordErrors`].

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::record::Field;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The constraint that a value failed, carrying a human-readable message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is empty where a value is mandatory
    #[error("{0}")]
    Required(String),

    /// Value is shorter than the minimum length
    #[error("{0}")]
    TooShort(String),

    /// Value exceeds the maximum length
    #[error("{0}")]
    TooLong(String),

    /// Value contains characters outside the allowed class
    #[error("{0}")]
    InvalidCharacters(String),

    /// Value does not have the expected structure (e.g. a MAC address)
    #[error("{0}")]
    InvalidFormat(String),

    /// Value is not one of the enumerated options
    #[error("{0}")]
    NotAllowed(String),
}

impl ValidationError {
    /// The message without any variant prefix
    pub fn message(&self) -> &str {
        match self {
            ValidationError::Required(msg)
            | ValidationError::TooShort(msg)
            | ValidationError::TooLong(msg)
            | ValidationError::InvalidCharacters(msg)
            | ValidationError::InvalidFormat(msg)
            | ValidationError::NotAllowed(msg) => msg,
        }
    }
}

/// Validation error attributed to a record field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {}", .field.as_str(), .error)]
pub struct FieldError {
    /// The field that failed
    pub field: Field,
    /// The first constraint the field violated
    pub error: ValidationError,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: Field, error: ValidationError) -> Self {
        Self { field, error }
    }

    /// The human-readable message, without the field prefix
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Ordered collection of field errors, one per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordErrors {
    errors: Vec<FieldError>,
}

impl RecordErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error, keeping insertion order
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// The first failing field, in rule-table order
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// The error recorded for a given field, if any
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Map of wire field name to message, as consumed by form renderers
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|e| (e.field.as_str(), e.message()))
            .collect()
    }
}

impl fmt::Display for RecordErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.errors.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for RecordErrors {}

impl From<FieldError> for RecordErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoIterator for RecordErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Reason free text was refused by `validate_and_sanitize`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputRejection {
    #[error("text must not be empty")]
    Empty,

    #[error("text must not exceed {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("text contains disallowed content")]
    DisallowedContent,
}
