//! Argon2id `PasswordHasher` adapter.
//!
//! Hashing is CPU-bound, so both operations run on Tokio's blocking pool.
//! Digests use the PHC string format and carry their own salt and
//! parameters, so verification works even if the configured cost changes.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    self, PasswordHash as EncodedHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use tokio::task;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Argon2id password hasher.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2PasswordHasher {
    /// Hasher using the library's recommended Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with explicit cost parameters.
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

fn hash_blocking(argon2: &Argon2<'_>, password: &[u8]) -> Result<String, PasswordHasherError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password, &salt)
        .map(|digest| digest.to_string())
        .map_err(|err| PasswordHasherError::hashing(err.to_string()))
}

fn verify_blocking(
    argon2: &Argon2<'_>,
    password: &[u8],
    digest: &str,
) -> Result<bool, PasswordHasherError> {
    let parsed =
        EncodedHash::new(digest).map_err(|err| PasswordHasherError::malformed_hash(err.to_string()))?;
    match argon2.verify_password(password, &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(PasswordHasherError::hashing(err.to_string())),
    }
}

fn join_error(err: task::JoinError) -> PasswordHasherError {
    PasswordHasherError::hashing(format!("hashing task failed: {err}"))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError> {
        let argon2 = self.argon2();
        let password = zeroize::Zeroizing::new(password.as_bytes().to_vec());
        let digest = task::spawn_blocking(move || hash_blocking(&argon2, &password))
            .await
            .map_err(join_error)??;
        Ok(PasswordHash::new(digest))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let argon2 = self.argon2();
        let password = zeroize::Zeroizing::new(password.as_bytes().to_vec());
        let digest = hash.as_str().to_owned();
        task::spawn_blocking(move || verify_blocking(&argon2, &password, &digest))
            .await
            .map_err(join_error)?
    }
}
