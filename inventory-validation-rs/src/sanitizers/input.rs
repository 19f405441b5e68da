//! Free-text input cleaning
//!
//! [`sanitize`] strips injection vectors from any text. [`validate_and_sanitize`]
//! first refuses empty, oversized or visibly hostile text, and only sanitizes
//! what it accepts. Both are public because callers use them independently.

use super::html::{
    strip_angle_brackets, strip_event_handlers, strip_iframe_blocks, strip_javascript_scheme,
    strip_script_blocks,
};
use super::string::{trim_text, trim_whitespace};
use super::{chain_sanitizers, SanitizeResult, StringSanitizer};
use crate::errors::InputRejection;
use crate::validators::security::validate_user_input;
use crate::validators::string::char_len;
use crate::DEFAULT_MAX_INPUT_LENGTH;

/// Result of [`validate_and_sanitize`]: the cleaned text or why it was refused
pub type SanitizationResult = Result<String, InputRejection>;

/// Steps of one sanitizing pass, in order
const INPUT_PIPELINE: [StringSanitizer; 6] = [
    trim_whitespace,
    strip_script_blocks,
    strip_iframe_blocks,
    strip_javascript_scheme,
    strip_event_handlers,
    strip_angle_brackets,
];

/// Sanitize free text, reporting what was removed.
///
/// The pipeline is repeated until a pass changes nothing. Removing one vector
/// can splice together another (`javajavascript:script:`), and stripping
/// brackets can expose whitespace at the edges. The fixpoint makes
/// `sanitize(sanitize(x)) == sanitize(x)`. Every step only deletes
/// characters, so the loop terminates.
pub fn sanitize_input(input: &str) -> SanitizeResult<String> {
    let mut result = SanitizeResult::unmodified(input.to_string());

    loop {
        let pass = chain_sanitizers(&result.sanitized, &INPUT_PIPELINE);
        if !pass.was_modified {
            break;
        }

        result.was_modified = true;
        for note in pass.details {
            if !result.details.contains(&note) {
                result.details.push(note);
            }
        }
        result.sanitized = pass.sanitized;
    }

    result
}

/// Sanitize free text
pub fn sanitize(input: &str) -> String {
    sanitize_input(input).sanitized
}

/// Validate raw text and return its sanitized form.
///
/// Refuses text that is empty after trimming, longer than 1000 characters,
/// or that contains a dangerous pattern before sanitization.
pub fn validate_and_sanitize(input: &str) -> SanitizationResult {
    validate_and_sanitize_with_limit(input, DEFAULT_MAX_INPUT_LENGTH)
}

/// [`validate_and_sanitize`] with an explicit length limit
pub fn validate_and_sanitize_with_limit(input: &str, max_length: usize) -> SanitizationResult {
    if trim_text(input).is_empty() {
        return Err(InputRejection::Empty);
    }

    let actual = char_len(input);
    if actual > max_length {
        return Err(InputRejection::TooLong {
            max: max_length,
            actual,
        });
    }

    if !validate_user_input(input, max_length) {
        return Err(InputRejection::DisallowedContent);
    }

    let sanitized = sanitize(input);
    if sanitized.is_empty() {
        // e.g. "<>" passes the screen but leaves nothing behind
        return Err(InputRejection::Empty);
    }

    Ok(sanitized)
}
