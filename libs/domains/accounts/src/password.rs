//! Password policy and one-way hashing.
//!
//! The policy accepts only ASCII letters and digits, at least 8 of them,
//! with at least one uppercase letter, one lowercase letter and one digit.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher as _, SaltString, rand_core::OsRng},
};

use crate::error::{AccountError, AccountResult};

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Check a candidate password against the policy.
///
/// Returns the accepted password, `EmptyPassword` when it is missing or
/// blank, and `WeakPassword` for any other violation.
pub fn validate_password(password: Option<&str>) -> AccountResult<&str> {
    let password = match password {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Err(AccountError::EmptyPassword),
    };

    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let alphanumeric = password.chars().all(|c| c.is_ascii_alphanumeric());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && alphanumeric && has_upper && has_lower && has_digit {
        Ok(password)
    } else {
        Err(AccountError::WeakPassword)
    }
}

/// One-way password hashing used by the account service
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password. Every call uses a fresh salt.
    fn hash(&self, plaintext: &str) -> AccountResult<String>;
}

/// Argon2id hasher producing PHC strings
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> AccountResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AccountError::PasswordHash(e.to_string()))
    }
}
