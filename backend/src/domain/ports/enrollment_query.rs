//! Driving port for enrollment reads.

use async_trait::async_trait;

use crate::domain::{EnrollmentWithCourse, Error, UserId};

/// Domain use-case port for the "my courses" view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentQuery: Send + Sync {
    /// Enrollments of `user_id`, each joined with its course.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<EnrollmentWithCourse>, Error>;
}
