//! Enrollment domain service.
//!
//! Implements the [`EnrollmentCommand`] and [`EnrollmentQuery`] driving
//! ports. The service checks that the user and course exist before enrolling
//! and that completed lesson and test ids belong to the enrolled course; the
//! repositories themselves keep only the uniqueness rules.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    CourseRepository, EnrollmentCommand, EnrollmentQuery, EnrollmentRepository,
    EnrollmentRepositoryError, UserRepository,
};
use crate::domain::{
    CourseId, Enrollment, EnrollmentId, EnrollmentWithCourse, Error, LessonId, NewEnrollment,
    ProgressUpdate, TestId, UserId,
};

/// Enrollment service implementing the enrollment driving ports.
#[derive(Clone)]
pub struct EnrollmentService<U, C, E> {
    users: Arc<U>,
    courses: Arc<C>,
    enrollments: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, C, E> EnrollmentService<U, C, E> {
    /// Create a new service with the given repositories and clock.
    pub fn new(
        users: Arc<U>,
        courses: Arc<C>,
        enrollments: Arc<E>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            courses,
            enrollments,
            clock,
        }
    }
}

impl<U, C, E> EnrollmentService<U, C, E>
where
    U: UserRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    fn map_enrollment_error(error: EnrollmentRepositoryError) -> Error {
        match error {
            EnrollmentRepositoryError::DuplicateEnrollment { user_id, course_id } => {
                Error::invalid_request("already enrolled in this course").with_details(json!({
                    "userId": user_id,
                    "courseId": course_id,
                    "code": "duplicate_enrollment",
                }))
            }
            EnrollmentRepositoryError::NotFound { enrollment_id } => {
                Error::not_found(format!("enrollment {enrollment_id} not found"))
            }
        }
    }

    fn unknown_ids_error(lessons: &[LessonId], tests: &[TestId]) -> Error {
        Error::invalid_request("completed lessons or tests do not belong to the course")
            .with_details(json!({
                "unknownLessons": lessons,
                "unknownTests": tests,
                "code": "unknown_course_content",
            }))
    }

    async fn ensure_update_matches_course(
        &self,
        enrollment: &Enrollment,
        update: &ProgressUpdate,
    ) -> Result<(), Error> {
        let (lessons, tests): (Vec<LessonId>, Vec<TestId>) =
            match self.courses.find_by_id(enrollment.course_id()).await {
                Some(course) => (
                    update.unknown_lessons(&course).collect(),
                    update.unknown_tests(&course).collect(),
                ),
                // A dangling course reference has no lessons or tests.
                None => (
                    update.completed_lessons.iter().copied().collect(),
                    update.completed_tests.iter().copied().collect(),
                ),
            };
        if lessons.is_empty() && tests.is_empty() {
            Ok(())
        } else {
            Err(Self::unknown_ids_error(&lessons, &tests))
        }
    }
}

#[async_trait]
impl<U, C, E> EnrollmentCommand for EnrollmentService<U, C, E>
where
    U: UserRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    async fn enroll(&self, user_id: UserId, course_id: CourseId) -> Result<Enrollment, Error> {
        if self.users.find_by_id(user_id).await.is_none() {
            return Err(Error::not_found(format!("user {user_id} not found")));
        }
        if self.courses.find_by_id(course_id).await.is_none() {
            return Err(Error::not_found(format!("course {course_id} not found")));
        }
        if self.enrollments.find(user_id, course_id).await.is_some() {
            return Err(Self::map_enrollment_error(
                EnrollmentRepositoryError::duplicate_enrollment(user_id, course_id),
            ));
        }

        let enrollment = self
            .enrollments
            .create(NewEnrollment {
                user_id,
                course_id,
                enrolled_at: self.clock.utc(),
            })
            .await
            .map_err(Self::map_enrollment_error)?;

        info!(
            enrollment_id = %enrollment.id(),
            user_id = %user_id,
            course_id = %course_id,
            "user enrolled"
        );
        Ok(enrollment)
    }

    async fn update_progress(
        &self,
        enrollment_id: EnrollmentId,
        update: ProgressUpdate,
    ) -> Result<Enrollment, Error> {
        let Some(current) = self.enrollments.find_by_id(enrollment_id).await else {
            return Err(Self::map_enrollment_error(
                EnrollmentRepositoryError::not_found(enrollment_id),
            ));
        };
        self.ensure_update_matches_course(&current, &update).await?;

        let enrollment = self
            .enrollments
            .update_progress(enrollment_id, update)
            .await
            .map_err(Self::map_enrollment_error)?;

        info!(
            enrollment_id = %enrollment_id,
            progress = enrollment.progress().get(),
            "enrollment progress updated"
        );
        Ok(enrollment)
    }
}

#[async_trait]
impl<U, C, E> EnrollmentQuery for EnrollmentService<U, C, E>
where
    U: UserRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<EnrollmentWithCourse>, Error> {
        let enrollments = self.enrollments.list_by_user(user_id).await;
        let mut joined = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = self.courses.find_by_id(enrollment.course_id()).await;
            joined.push(EnrollmentWithCourse { enrollment, course });
        }
        Ok(joined)
    }
}

#[cfg(test)]
#[path = "enrollment_service_tests.rs"]
mod tests;
