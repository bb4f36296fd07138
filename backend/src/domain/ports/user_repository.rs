//! Port abstraction for user storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Email, NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Another user already registered this email.
        DuplicateEmail { email: String } => "email {email} is already registered",
    }
}

/// Storage contract for registered users.
///
/// `create` checks email uniqueness and inserts in one step, so two
/// concurrent registrations for the same address cannot both succeed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Fetch a user by exact, case-sensitive email.
    async fn find_by_email(&self, email: &Email) -> Option<User>;

    /// Allocate an id and store the user.
    ///
    /// Fails with [`UserRepositoryError::DuplicateEmail`] and leaves the store
    /// untouched when the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;
}
