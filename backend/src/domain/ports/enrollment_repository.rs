//! Port abstraction for enrollment storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{
    CourseId, Enrollment, EnrollmentId, NewEnrollment, ProgressUpdate, UserId,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enrollment repository adapters.
    pub enum EnrollmentRepositoryError {
        /// The user is already enrolled in the course.
        DuplicateEnrollment { user_id: UserId, course_id: CourseId } =>
            "user {user_id} is already enrolled in course {course_id}",
        /// No enrollment has the given id.
        NotFound { enrollment_id: EnrollmentId } =>
            "enrollment {enrollment_id} not found",
    }
}

/// Storage contract for enrollments.
///
/// User and course ids are weak references: adapters do not check that
/// they resolve.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Enrollments belonging to `user_id`, in insertion order.
    async fn list_by_user(&self, user_id: UserId) -> Vec<Enrollment>;

    /// The enrollment for a `(user, course)` pair, if any.
    async fn find(&self, user_id: UserId, course_id: CourseId) -> Option<Enrollment>;

    /// Fetch an enrollment by identifier.
    async fn find_by_id(&self, id: EnrollmentId) -> Option<Enrollment>;

    /// Allocate an id and store a zero-progress enrollment.
    ///
    /// Fails with [`EnrollmentRepositoryError::DuplicateEnrollment`] when the
    /// pair is already enrolled; nothing is stored in that case.
    async fn create(&self, enrollment: NewEnrollment)
    -> Result<Enrollment, EnrollmentRepositoryError>;

    /// Replace progress and completion sets wholesale.
    ///
    /// Fails with [`EnrollmentRepositoryError::NotFound`] for an unknown id.
    async fn update_progress(
        &self,
        id: EnrollmentId,
        update: ProgressUpdate,
    ) -> Result<Enrollment, EnrollmentRepositoryError>;
}
