//! Driving port for account sign-up.

use async_trait::async_trait;

use crate::domain::{Error, RegistrationRequest, User};

/// Domain use-case port for registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Create an account. Fails with an invalid-request error when the email
    /// is already registered.
    async fn register(&self, request: &RegistrationRequest) -> Result<User, Error>;
}
