//! # Authentication Use Case
//!
//! Credential verification against the user repository, plus the Argon2id
//! helpers the repository is seeded with.
//!
//! Verification goes through `argon2`'s `verify_password`, which compares in
//! constant time. Both "unknown email" and "wrong password" collapse into the
//! single [`AuthError::InvalidCredentials`] so callers cannot tell them apart.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AuthError;
use crate::users::{User, UserRepository};

/// Validate `email`/`password` against the repository.
///
/// On success the caller persists `user.sid` into the session and redirects;
/// on failure it re-renders the login form with a 401.
pub fn login(
    users: &dyn UserRepository,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = users
        .find_by_email(email)
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

/// Hash a password with Argon2id default parameters, producing a PHC string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verify a password against a stored PHC string. A malformed hash counts as
/// a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
