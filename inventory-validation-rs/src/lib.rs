//! # Inventory Validation Library
//!
//! Field validation and input sanitization for the equipment inventory
//! console. Raw field text is sanitized first, then checked against the
//! record rule table, either one field at a time or as a whole record.
//!
//! ## Features
//!
//! - Declarative per-field rules shared by every entry point
//! - Strict, collect-all and partial record validation
//! - Sanitization of script/iframe blocks, `javascript:` URIs, inline handlers
//! - Password policy, e-mail and URL checks, HTML escaping, secure tokens
//! - Login attempt rate limiting

mod builder;
mod errors;
pub mod rate_limit;
pub mod record;
pub mod sanitizers;
pub mod schema;
mod token;
pub mod validators;

use serde::Deserialize;
use std::time::Duration;

pub use builder::ValidationBuilder;
pub use errors::{FieldError, InputRejection, RecordErrors, ValidationError, ValidationResult};
pub use rate_limit::RateLimiter;
pub use record::{
    raw_record, EquipmentType, Field, Manufacturer, OperatingSystem, RawRecord, Record,
    RecordPatch, Status,
};
pub use sanitizers::{sanitize, sanitize_input, validate_and_sanitize, SanitizeResult};
pub use schema::{
    rule_for, rules, safe_validate_record, validate_field, validate_field_value, validate_patch,
    validate_record, FieldCheck, FieldRule,
};
pub use token::generate_secure_token;
pub use validators::{PasswordPolicy, PasswordReport};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::builder::ValidationBuilder;
    pub use crate::errors::{FieldError, InputRejection, RecordErrors, ValidationError};
    pub use crate::record::{Field, RawRecord, Record, RecordPatch};
    pub use crate::sanitizers::{sanitize, validate_and_sanitize};
    pub use crate::schema::{safe_validate_record, validate_field, validate_patch, FieldCheck};
    pub use crate::{sanitizers, validators};
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default maximum length of free text accepted by the sanitizer
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1000;

/// Default number of failed logins before lockout
pub const DEFAULT_MAX_LOGIN_ATTEMPTS: u32 = 5;

/// Default lockout window (15 minutes)
pub const DEFAULT_LOCKOUT_SECONDS: u64 = 15 * 60;

/// Default idle session timeout (30 minutes)
pub const DEFAULT_SESSION_TIMEOUT_SECONDS: u64 = 30 * 60;

/// Security settings shared by the console and the rate limiter
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub max_login_attempts: u32,
    pub lockout_seconds: u64,
    pub session_timeout_seconds: u64,
    pub max_input_length: usize,
    pub password: PasswordPolicy,
}

impl SecurityConfig {
    pub fn lockout_duration(&self) -> Duration {
        Duration::from_secs(self.lockout_seconds)
    }

    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_seconds)
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_login_attempts: DEFAULT_MAX_LOGIN_ATTEMPTS,
            lockout_seconds: DEFAULT_LOCKOUT_SECONDS,
            session_timeout_seconds: DEFAULT_SESSION_TIMEOUT_SECONDS,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            password: PasswordPolicy::default(),
        }
    }
}

/// Start a validation chain on a labelled value
pub fn validate<T>(label: &'static str, input: T) -> ValidationBuilder<T> {
    ValidationBuilder::new(label, input)
}
