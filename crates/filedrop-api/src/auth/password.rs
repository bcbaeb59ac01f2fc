//! Password hashing capability.
//!
//! A thin wrapper over bcrypt so the rest of the application treats hashing
//! as an opaque hash/verify pair.

use filedrop_core::AppError;

/// Hash a plaintext password with a per-hash salt.
pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, AppError> {
    bcrypt::verify(plaintext, digest)
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))
}
