// src/modules/auth/application/ports/outgoing/password_hasher.rs

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored hash could not be parsed")]
    InvalidHash,

    #[error("Hashing task failed to complete")]
    TaskFailed,
}

/// Hashing runs on the blocking pool; implementations must not stall the
/// async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
