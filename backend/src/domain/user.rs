//! User accounts.
//!
//! A user is created once by registration and never updated afterwards.
//! Emails are compared exactly (case-sensitive) once surrounding whitespace
//! has been trimmed.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::UserId;

/// Validation errors raised by the user value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Email was blank.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email did not look like `local@domain`.
    #[error("email must look like name@example.com")]
    InvalidEmail,
    /// Full name was blank.
    #[error("full name must not be empty")]
    EmptyFullName,
    /// User type was neither `student` nor `teacher`.
    #[error("user type must be student or teacher")]
    UnknownUserType,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Login and uniqueness key of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Email(String);

impl Email {
    /// Trim and validate an email address.
    ///
    /// # Examples
    /// ```
    /// use academy::domain::Email;
    ///
    /// let email = Email::new("  ada@example.com ").unwrap();
    /// assert_eq!(email.as_ref(), "ada@example.com");
    /// assert!(Email::new("ada").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(trimmed) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Name shown on a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct FullName(String);

impl FullName {
    /// Trim and validate a full name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyFullName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<FullName> for String {
    fn from(value: FullName) -> Self {
        value.0
    }
}

/// Role tag attached at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Takes courses.
    Student,
    /// Teaches courses.
    Teacher,
}

impl UserType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            _ => Err(UserValidationError::UnknownUserType),
        }
    }
}

/// Opaque password digest produced by the password hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a digest string produced by a hasher.
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Encoded digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Registered user.
///
/// ## Invariants
/// - `email` is unique across all stored users.
/// - The password hash never leaves the domain; HTTP responses use a DTO
///   that omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: PasswordHash,
    full_name: FullName,
    user_type: UserType,
}

impl User {
    /// Attach an allocated identifier to registration data.
    #[must_use]
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        let NewUser {
            email,
            password_hash,
            full_name,
            user_type,
        } = new_user;
        Self {
            id,
            email,
            password_hash,
            full_name,
            user_type,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Login email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Stored password digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Display name.
    #[must_use]
    pub const fn full_name(&self) -> &FullName {
        &self.full_name
    }

    /// Role tag.
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.user_type
    }
}

/// Data required to store a user; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Login email.
    pub email: Email,
    /// Digest of the chosen password.
    pub password_hash: PasswordHash,
    /// Display name.
    pub full_name: FullName,
    /// Role tag.
    pub user_type: UserType,
}
