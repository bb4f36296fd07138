//! Account domain service: registration and login.
//!
//! Implements the [`UserRegistration`] and [`LoginService`] driving ports on
//! top of the user repository and the password hashing collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    LoginService, PasswordHasher, PasswordHasherError, UserRegistration, UserRepository,
    UserRepositoryError,
};
use crate::domain::{Error, LoginCredentials, NewUser, RegistrationRequest, User};

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Account service implementing the registration and login ports.
#[derive(Clone)]
pub struct AccountService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> AccountService<U, H> {
    /// Create a new service over the given repository and hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

impl<U, H> AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    fn map_user_error(error: UserRepositoryError) -> Error {
        match error {
            UserRepositoryError::DuplicateEmail { email } => {
                Error::invalid_request("email is already registered").with_details(json!({
                    "email": email,
                    "code": "duplicate_email",
                }))
            }
        }
    }

    fn map_hasher_error(error: PasswordHasherError) -> Error {
        Error::internal(format!("password hasher error: {error}"))
    }
}

#[async_trait]
impl<U, H> UserRegistration for AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, request: &RegistrationRequest) -> Result<User, Error> {
        // Fast path; `create` still enforces uniqueness atomically.
        if self.users.find_by_email(request.email()).await.is_some() {
            return Err(Self::map_user_error(UserRepositoryError::duplicate_email(
                request.email().as_ref(),
            )));
        }

        let password_hash = self
            .hasher
            .hash(request.password())
            .await
            .map_err(Self::map_hasher_error)?;

        let user = self
            .users
            .create(NewUser {
                email: request.email().clone(),
                password_hash,
                full_name: request.full_name().clone(),
                user_type: request.user_type(),
            })
            .await
            .map_err(Self::map_user_error)?;

        info!(user_id = %user.id(), user_type = %user.user_type(), "registered user");
        Ok(user)
    }
}

#[async_trait]
impl<U, H> LoginService for AccountService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let Some(user) = self.users.find_by_email(credentials.email()).await else {
            debug!("login rejected: unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let verified = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(Self::map_hasher_error)?;
        if !verified {
            debug!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id(), "user authenticated");
        Ok(user)
    }
}
