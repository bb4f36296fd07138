//! Integer identifiers for catalogue entities and their value objects.
//!
//! Every identifier is a distinct newtype so a course id can never be passed
//! where a user id is expected. Identifiers are strictly positive; the
//! allocator hands them out starting at 1 and parsing rejects 0.

use std::num::{NonZeroU64, ParseIntError};

use thiserror::Error;

/// Validation errors raised when an identifier arrives from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdValidationError {
    /// Identifiers start at 1.
    #[error("identifier must be a positive integer")]
    Zero,
    /// Input was not an unsigned integer.
    #[error("identifier must be a positive integer: {0}")]
    Malformed(#[from] ParseIntError),
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "u64", into = "u64")]
        pub struct $name(u64);

        impl $name {
            /// Validate and wrap a raw identifier.
            pub fn new(raw: u64) -> Result<Self, IdValidationError> {
                if raw == 0 {
                    return Err(IdValidationError::Zero);
                }
                Ok(Self(raw))
            }

            /// Raw integer value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl TryFrom<u64> for $name {
            type Error = IdValidationError;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<NonZeroU64> for $name {
            fn from(value: NonZeroU64) -> Self {
                Self(value.get())
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s.parse::<u64>()?)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Identifier of a registered user.
    UserId
}

define_id! {
    /// Identifier of a catalogue course.
    CourseId
}

define_id! {
    /// Identifier of a user's enrollment in a course.
    EnrollmentId
}

define_id! {
    /// Identifier of a video lesson, unique within its course.
    LessonId
}

define_id! {
    /// Identifier of a course test, unique within its course.
    TestId
}

define_id! {
    /// Identifier of a downloadable course material.
    MaterialId
}

define_id! {
    /// Identifier of a question, unique within its test.
    QuestionId
}
