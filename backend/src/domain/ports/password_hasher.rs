//! Port for the password hashing collaborator.

use async_trait::async_trait;

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHasherError {
        /// Hash computation failed.
        Hashing { message: String } => "password hashing failed: {message}",
        /// A stored digest could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Derives and checks password digests.
///
/// Digests are opaque to the domain; only the adapter that produced one can
/// verify against it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest of `password`.
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Whether `password` matches `hash`. A mismatch is `Ok(false)`.
    async fn verify(&self, password: &str, hash: &PasswordHash)
    -> Result<bool, PasswordHasherError>;
}
