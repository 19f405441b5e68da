//! Input sanitizers
//!
//! Each sanitizer is a small step that removes one kind of unwanted content
//! and notes what it did. Steps are composed with [`chain_sanitizers`]; the
//! free-text pipeline used by the console lives in [`input`].

pub mod html;
pub mod input;
pub mod string;

pub use html::*;
pub use input::*;
pub use string::*;

use serde::Serialize;

/// Output of a sanitizer together with a note of each change made
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizeResult<T> {
    pub sanitized: T,
    pub was_modified: bool,
    /// One short note per step that changed the value, in order
    pub details: Vec<&'static str>,
}

impl<T> SanitizeResult<T> {
    /// Value passed through untouched
    pub fn unmodified(content: T) -> Self {
        Self {
            sanitized: content,
            was_modified: false,
            details: Vec::new(),
        }
    }

    /// Value changed by a step described by `note`
    pub fn modified(content: T, note: &'static str) -> Self {
        Self {
            sanitized: content,
            was_modified: true,
            details: vec![note],
        }
    }

    /// Notes joined for display, or `None` when nothing changed
    pub fn summary(&self) -> Option<String> {
        if self.details.is_empty() {
            None
        } else {
            Some(self.details.join("; "))
        }
    }
}

/// A single text-cleaning step
pub type StringSanitizer = fn(&str) -> SanitizeResult<String>;

/// Run steps in order, each on the previous step's output
pub fn chain_sanitizers(input: &str, steps: &[StringSanitizer]) -> SanitizeResult<String> {
    let mut result = SanitizeResult::unmodified(input.to_string());

    for step in steps {
        let next = step(&result.sanitized);
        if next.was_modified {
            result.was_modified = true;
            result.details.extend(next.details);
        }
        result.sanitized = next.sanitized;
    }

    result
}
