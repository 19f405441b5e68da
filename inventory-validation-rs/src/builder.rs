//! Fluent checks on a single labelled value
//!
//! Checks run in the order they are chained. Once one fails, the rest are
//! skipped and [`ValidationBuilder::finish`] returns that failure.

use regex::Regex;

use crate::errors::{ValidationError, ValidationResult};
use crate::validators::string::char_len;

/// Chain of checks over one value
#[derive(Debug, Clone)]
pub struct ValidationBuilder<T> {
    /// Human name that starts every generated message
    label: &'static str,
    value: T,
    /// First failure, if any
    error: Option<ValidationError>,
}

impl<T> ValidationBuilder<T> {
    pub fn new(label: &'static str, value: T) -> Self {
        Self {
            label,
            value,
            error: None,
        }
    }

    /// Run `validator` unless an earlier check failed
    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: FnOnce(&T) -> ValidationResult<()>,
    {
        if self.error.is_none() {
            if let Err(err) = validator(&self.value) {
                self.error = Some(err);
            }
        }
        self
    }

    /// The value, or the first failure
    pub fn finish(self) -> ValidationResult<T> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

// Text checks. Lengths are in characters.
impl<S: AsRef<str>> ValidationBuilder<S> {
    /// Fails with "<label> is required" on empty text
    pub fn required(self) -> Self {
        let label = self.label;
        self.validate(|s| {
            if s.as_ref().is_empty() {
                Err(ValidationError::Required(format!("{} is required", label)))
            } else {
                Ok(())
            }
        })
    }

    pub fn min_length(self, min: usize) -> Self {
        let label = self.label;
        self.validate(|s| {
            if char_len(s.as_ref()) < min {
                Err(ValidationError::TooShort(format!(
                    "{} must be at least {} characters",
                    label, min
                )))
            } else {
                Ok(())
            }
        })
    }

    pub fn max_length(self, max: usize) -> Self {
        let label = self.label;
        self.validate(|s| {
            if char_len(s.as_ref()) > max {
                Err(ValidationError::TooLong(format!(
                    "{} cannot exceed {} characters",
                    label, max
                )))
            } else {
                Ok(())
            }
        })
    }

    /// Character-class check, reported as invalid characters
    pub fn matches(self, re: &Regex, message: &str) -> Self {
        self.validate(|s| {
            if re.is_match(s.as_ref()) {
                Ok(())
            } else {
                Err(ValidationError::InvalidCharacters(message.to_string()))
            }
        })
    }

    /// Structural check, reported as an invalid format
    pub fn matches_format(self, re: &Regex, message: &str) -> Self {
        self.validate(|s| {
            if re.is_match(s.as_ref()) {
                Ok(())
            } else {
                Err(ValidationError::InvalidFormat(message.to_string()))
            }
        })
    }

    /// Exact, case-sensitive membership in `allowed`
    pub fn one_of(self, allowed: &[&str]) -> Self {
        let label = self.label;
        self.validate(|s| {
            if allowed.contains(&s.as_ref()) {
                Ok(())
            } else {
                Err(ValidationError::NotAllowed(format!(
                    "Invalid {}",
                    label.to_lowercase()
                )))
            }
        })
    }
}

// Bounds for ordered values such as page numbers
impl<T: PartialOrd + std::fmt::Display> ValidationBuilder<T> {
    pub fn min(self, min: T) -> Self {
        let label = self.label;
        self.validate(|value| {
            if value < &min {
                Err(ValidationError::TooShort(format!(
                    "{} must be at least {}",
                    label, min
                )))
            } else {
                Ok(())
            }
        })
    }

    pub fn max(self, max: T) -> Self {
        let label = self.label;
        self.validate(|value| {
            if value > &max {
                Err(ValidationError::TooLong(format!(
                    "{} cannot exceed {}",
                    label, max
                )))
            } else {
                Ok(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_checks() {
        let result = ValidationBuilder::new("Username", "hello")
            .required()
            .min_length(3)
            .max_length(10)
            .finish();
        assert_eq!(result, Ok("hello"));

        let result = ValidationBuilder::new("Username", "").required().finish();
        assert_eq!(
            result,
            Err(ValidationError::Required("Username is required".to_string()))
        );

        // Fails at a later step
        let result = ValidationBuilder::new("Username", "hello")
            .required()
            .max_length(3)
            .finish();
        assert!(matches!(result, Err(ValidationError::TooLong(_))));
    }

    #[test]
    fn test_first_failure_wins() {
        let re = Regex::new(r"^[a-z]+$").unwrap();
        let err = ValidationBuilder::new("Username", "")
            .required()
            .min_length(3)
            .matches(&re, "lowercase only")
            .finish()
            .unwrap_err();

        assert!(matches!(err, ValidationError::Required(_)));
    }

    #[test]
    fn test_lengths_count_characters() {
        // 5 characters, 7 bytes
        let result = ValidationBuilder::new("Full name", "Pérez").max_length(5).finish();
        assert!(result.is_ok());
    }

    #[test]
    fn test_one_of() {
        let allowed = ["Laptop", "Desktop", "Tablet"];
        assert!(ValidationBuilder::new("Equipment type", "Tablet")
            .one_of(&allowed)
            .finish()
            .is_ok());

        let err = ValidationBuilder::new("Equipment type", "Phone")
            .one_of(&allowed)
            .finish()
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid equipment type");
    }

    #[test]
    fn test_bounds() {
        assert!(ValidationBuilder::new("Page", 5).min(1).max(10).finish().is_ok());

        let err = ValidationBuilder::new("Page", 0).min(1).finish().unwrap_err();
        assert_eq!(err.to_string(), "Page must be at least 1");

        let err = ValidationBuilder::new("Limit", 101).max(100).finish().unwrap_err();
        assert!(matches!(err, ValidationError::TooLong(_)));
    }
}
