//! String sanitization utilities

use super::SanitizeResult;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Strip leading and trailing whitespace, counting a stray byte-order mark as whitespace
pub fn trim_text(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Trim whitespace from beginning and end
pub fn trim_whitespace(input: &str) -> SanitizeResult<String> {
    let trimmed = trim_text(input);

    if trimmed.len() == input.len() {
        SanitizeResult::unmodified(input.to_string())
    } else {
        SanitizeResult::modified(trimmed.to_string(), "Trimmed whitespace")
    }
}
