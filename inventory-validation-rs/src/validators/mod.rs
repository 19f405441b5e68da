//! Validator functions and utilities
//!
//! This module provides specialized validators for different types of input.
//! These validators can be used directly or through the field rule table.

pub mod password;
pub mod security;
pub mod string;

// Re-export all validators for convenience
pub use password::*;
pub use security::*;
pub use string::*;
