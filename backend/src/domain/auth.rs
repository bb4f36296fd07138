//! Authentication primitives: login credentials and registration requests.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::{Email, FullName, UserType, UserValidationError};

/// Domain error returned when login or registration payloads are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Password was blank.
    EmptyPassword,
    /// A user field failed validation.
    User(UserValidationError),
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::User(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<UserValidationError> for CredentialsValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::User(value)
    }
}

fn validate_password(password: &str) -> Result<Zeroizing<String>, CredentialsValidationError> {
    if password.is_empty() {
        return Err(CredentialsValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(password.to_owned()))
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is a trimmed, well-formed address.
/// - `password` is non-empty but retains caller-provided whitespace.
///
/// # Examples
/// ```
/// use academy::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada@example.com", "secret").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            email: Email::new(email)?,
            password: validate_password(password)?,
        })
    }

    /// Email used for the user lookup.
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated sign-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    email: Email,
    password: Zeroizing<String>,
    full_name: FullName,
    user_type: UserType,
}

impl RegistrationRequest {
    /// Validate raw registration inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        full_name: &str,
        user_type: UserType,
    ) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            email: Email::new(email)?,
            password: validate_password(password)?,
            full_name: FullName::new(full_name)?,
            user_type,
        })
    }

    pub const fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub const fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub const fn user_type(&self) -> UserType {
        self.user_type
    }
}
