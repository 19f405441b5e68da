//! Security validators
//!
//! Detection of the markup injection vectors that free-text fields are
//! screened for. These checks look at raw, unsanitized text and never modify
//! it; the stripping counterparts live in [`crate::sanitizers::html`].

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::string::char_len;

lazy_static! {
    /// `<script ...> ... </script>`, shortest match, across lines
    pub(crate) static ref SCRIPT_BLOCK_REGEX: Regex =
        Regex::new(r"(?is)<script(?-u:\b).*?</script>").unwrap();

    /// `<iframe ...> ... </iframe>`, shortest match, across lines
    pub(crate) static ref IFRAME_BLOCK_REGEX: Regex =
        Regex::new(r"(?is)<iframe(?-u:\b).*?</iframe>").unwrap();

    /// The `javascript:` URI scheme
    pub(crate) static ref JAVASCRIPT_SCHEME_REGEX: Regex =
        Regex::new(r"(?i)javascript:").unwrap();

    /// Inline handler attribute immediately followed by `=`
    static ref EVENT_HANDLER_REGEX: Regex =
        Regex::new(r"(?i)on[0-9a-z_]+=").unwrap();
}

/// Injection vectors rejected by [`validate_user_input`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerousPattern {
    ScriptBlock,
    JavascriptScheme,
    EventHandler,
    IframeBlock,
}

impl DangerousPattern {
    /// Patterns in the order they are tested
    pub const ALL: [DangerousPattern; 4] = [
        DangerousPattern::ScriptBlock,
        DangerousPattern::JavascriptScheme,
        DangerousPattern::EventHandler,
        DangerousPattern::IframeBlock,
    ];

    fn regex(&self) -> &'static Regex {
        match self {
            DangerousPattern::ScriptBlock => &SCRIPT_BLOCK_REGEX,
            DangerousPattern::JavascriptScheme => &JAVASCRIPT_SCHEME_REGEX,
            DangerousPattern::EventHandler => &EVENT_HANDLER_REGEX,
            DangerousPattern::IframeBlock => &IFRAME_BLOCK_REGEX,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DangerousPattern::ScriptBlock => "script block",
            DangerousPattern::JavascriptScheme => "javascript: URI",
            DangerousPattern::EventHandler => "inline event handler",
            DangerousPattern::IframeBlock => "iframe block",
        }
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex().is_match(input)
    }
}

/// First dangerous pattern found in raw text, if any
pub fn find_dangerous_pattern(input: &str) -> Option<DangerousPattern> {
    DangerousPattern::ALL
        .iter()
        .copied()
        .find(|pattern| pattern.is_match(input))
}

/// Pure predicate over raw user text.
///
/// Rejects empty input, input longer than `max_length` characters, and input
/// containing any [`DangerousPattern`]. Nothing is sanitized.
pub fn validate_user_input(input: &str, max_length: usize) -> bool {
    if input.is_empty() || char_len(input) > max_length {
        return false;
    }

    if let Some(pattern) = find_dangerous_pattern(input) {
        log::debug!("Rejected user input: matched {}", pattern.description());
        return false;
    }

    true
}

/// True only for a well-formed `http` or `https` URL
pub fn validate_secure_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
