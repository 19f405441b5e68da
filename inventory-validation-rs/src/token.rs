//! Random token generation

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// Generate a random alphanumeric token of `length` characters, drawn from
/// the operating system's CSPRNG
pub fn generate_secure_token(length: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
