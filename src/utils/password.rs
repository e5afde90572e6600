//! One-way password hashing with bcrypt at a fixed work factor.

use bcrypt::BcryptError;

use crate::constants::HASH_ROUNDS;

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain, HASH_ROUNDS)
}

/// Check a plaintext candidate against a stored hash.
pub fn verify_password(candidate: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(candidate, hash)
}
