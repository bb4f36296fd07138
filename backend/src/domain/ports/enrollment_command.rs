//! Driving port for enrollment mutations.

use async_trait::async_trait;

use crate::domain::{CourseId, Enrollment, EnrollmentId, Error, ProgressUpdate, UserId};

/// Domain use-case port for enrolling and recording progress.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Enroll `user_id` in `course_id`, stamping the current time.
    async fn enroll(&self, user_id: UserId, course_id: CourseId) -> Result<Enrollment, Error>;

    /// Replace an enrollment's progress and completion sets.
    async fn update_progress(
        &self,
        enrollment_id: EnrollmentId,
        update: ProgressUpdate,
    ) -> Result<Enrollment, Error>;
}
