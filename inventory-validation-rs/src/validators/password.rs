//! Password policy validation

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::string::char_len;

lazy_static! {
    static ref SYMBOL_REGEX: Regex = Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap();
}

/// Requirements a password must meet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_symbol: true,
        }
    }
}

/// Outcome of a password check; `errors` lists every unmet requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check a password against every requirement of the policy
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> PasswordReport {
    let mut errors = Vec::new();

    if char_len(password) < policy.min_length {
        errors.push(format!(
            "Password must be at least {} characters",
            policy.min_length
        ));
    }

    if policy.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }

    if policy.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }

    if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number".to_string());
    }

    if policy.require_symbol && !SYMBOL_REGEX.is_match(password) {
        errors.push("Password must contain at least one special symbol".to_string());
    }

    PasswordReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
