//! HTML sanitization utilities
//!
//! This module provides the stripping steps that neutralize markup injection
//! in free text, plus entity encoding for contexts that render HTML.

use super::SanitizeResult;
use crate::validators::security::{
    IFRAME_BLOCK_REGEX, JAVASCRIPT_SCHEME_REGEX, SCRIPT_BLOCK_REGEX,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Looser than the detection pattern: whitespace may precede the `=`
    static ref EVENT_HANDLER_ATTR_REGEX: Regex =
        Regex::new(r"(?i)on[0-9a-z_]+\s*=").unwrap();
}

fn strip_matches(input: &str, re: &Regex, note: &'static str) -> SanitizeResult<String> {
    let result = re.replace_all(input, "");

    if result == input {
        SanitizeResult::unmodified(input.to_string())
    } else {
        SanitizeResult::modified(result.into_owned(), note)
    }
}

/// Remove `<script>...</script>` blocks including their content
pub fn strip_script_blocks(input: &str) -> SanitizeResult<String> {
    strip_matches(input, &SCRIPT_BLOCK_REGEX, "Removed script blocks")
}

/// Remove `<iframe>...</iframe>` blocks including their content
pub fn strip_iframe_blocks(input: &str) -> SanitizeResult<String> {
    strip_matches(input, &IFRAME_BLOCK_REGEX, "Removed iframe blocks")
}

/// Remove the `javascript:` scheme prefix, keeping what follows it
pub fn strip_javascript_scheme(input: &str) -> SanitizeResult<String> {
    strip_matches(input, &JAVASCRIPT_SCHEME_REGEX, "Removed javascript: scheme")
}

/// Remove inline event-handler attributes (`onclick=`, `onload =` ...)
pub fn strip_event_handlers(input: &str) -> SanitizeResult<String> {
    strip_matches(input, &EVENT_HANDLER_ATTR_REGEX, "Removed event handlers")
}

/// Remove every remaining `<` and `>`
pub fn strip_angle_brackets(input: &str) -> SanitizeResult<String> {
    if !input.contains(|c| c == '<' || c == '>') {
        return SanitizeResult::unmodified(input.to_string());
    }

    let result: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    SanitizeResult::modified(result, "Removed angle brackets")
}

/// Encode HTML special characters to prevent XSS
pub fn encode_html_entities(input: &str) -> SanitizeResult<String> {
    let replacements = [
        ('&', "&amp;"),
        ('<', "&lt;"),
        ('>', "&gt;"),
        ('"', "&quot;"),
        ('\'', "&#39;"),
    ];

    let mut result = input.to_string();
    let mut was_modified = false;

    for (from, to) in &replacements {
        let original_len = result.len();
        result = result.replace(*from, to);
        if result.len() != original_len {
            was_modified = true;
        }
    }

    if was_modified {
        SanitizeResult::modified(result, "Encoded HTML entities")
    } else {
        SanitizeResult::unmodified(input.to_string())
    }
}

/// Escape text for insertion into HTML
pub fn escape_html(input: &str) -> String {
    encode_html_entities(input).sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_script_blocks() {
        let result = strip_script_blocks("<script>alert('x')</script>Hello");
        assert!(result.was_modified);
        assert_eq!(result.sanitized, "Hello");

        // Shortest match: text between two blocks survives
        let result = strip_script_blocks("<script>a</script>keep<SCRIPT>b</SCRIPT>");
        assert_eq!(result.sanitized, "keep");

        let result = strip_script_blocks("<script>\nalert(1)\n</script>!");
        assert_eq!(result.sanitized, "!");
    }

    #[test]
    fn test_strip_iframe_blocks() {
        let result = strip_iframe_blocks("before<iframe src=\"evil\"></iframe>after");
        assert_eq!(result.sanitized, "beforeafter");
        assert!(!strip_iframe_blocks("no frames here").was_modified);
    }

    #[test]
    fn test_strip_javascript_scheme() {
        let result = strip_javascript_scheme("JavaScript:alert('x')");
        assert_eq!(result.sanitized, "alert('x')");
    }

    #[test]
    fn test_strip_event_handlers() {
        assert_eq!(strip_event_handlers("onclick=alert('x')").sanitized, "alert('x')");
        assert_eq!(strip_event_handlers("img ONLOAD = run()").sanitized, "img  run()");
        assert!(!strip_event_handlers("online store").was_modified);
    }

    #[test]
    fn test_strip_angle_brackets() {
        assert_eq!(strip_angle_brackets("a < b > c").sanitized, "a  b  c");
        assert!(!strip_angle_brackets("a b c").was_modified);
    }

    #[test]
    fn test_encode_html_entities() {
        let result = encode_html_entities("Test <script>alert('XSS')</script>");
        assert!(result.was_modified);
        assert_eq!(
            result.sanitized,
            "Test &lt;script&gt;alert(&#39;XSS&#39;)&lt;/script&gt;"
        );

        let clean = "Plain text without special chars";
        let result = encode_html_entities(clean);
        assert!(!result.was_modified);
        assert_eq!(result.sanitized, clean);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
    }
}
