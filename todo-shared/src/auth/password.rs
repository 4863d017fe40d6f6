/// Password hashing with Argon2id
///
/// Hashes use the `argon2` crate's default parameters (Argon2id, v0x13,
/// 19 MiB memory, 2 passes, 1 lane) and a fresh 16-byte salt per call. The
/// result is a PHC string, so the parameters and salt travel with the hash
/// and verification needs nothing else.
///
/// # Example
///
/// ```
/// use todo_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("secret")?;
/// assert_ne!(hash, "secret");
/// assert!(verify_password("secret", &hash)?);
/// assert!(!verify_password("other", &hash)?);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Stored value is not a PHC string
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a plaintext password
///
/// Hashing the same input twice yields different strings because the salt
/// differs. An input that is already a hash is hashed again.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if the hasher rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored PHC string
///
/// Returns `Ok(false)` on mismatch. Parameters are read from the hash, so
/// hashes made with other settings still verify.
///
/// # Errors
///
/// `InvalidHash` if `hash` cannot be parsed, `VerifyError` for any other
/// failure.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}
