use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    /// The plaintext does not correspond to the stored hash.
    #[error("password does not match")]
    Mismatch,
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Trait for password hashing and verification
pub trait PasswordHashingService: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, PasswordError>;
    fn verify_password(&self, password: &str, hash: &str) -> Result<(), PasswordError>;
}
