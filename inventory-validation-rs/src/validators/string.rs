//! Character classes and shape checks for record fields

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Letters, digits and hyphen (employee numbers, service tags)
    pub static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[A-Za-z0-9-]+$").unwrap();

    /// ASCII letters, Latin-1 accented letters and whitespace
    pub static ref PERSON_NAME_REGEX: Regex = Regex::new(r"^[A-Za-zÀ-ÿ\s]+$").unwrap();

    /// Lowercase letters, digits, hyphen and underscore
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-z0-9_-]+$").unwrap();

    /// Letters, digits, whitespace and hyphen
    pub static ref MODEL_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9\s-]+$").unwrap();

    /// Six hex pairs joined entirely by colons or entirely by hyphens
    pub static ref MAC_ADDRESS_REGEX: Regex = Regex::new(
        r"^(?:[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){5})$"
    )
    .unwrap();

    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Number of characters (not bytes) in a string
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Loose e-mail shape check: something, `@`, something, `.`, something
pub fn validate_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}
