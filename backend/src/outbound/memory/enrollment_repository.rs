//! In-memory `EnrollmentRepository` adapter.

use async_trait::async_trait;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::{CourseId, Enrollment, EnrollmentId, NewEnrollment, ProgressUpdate, UserId};

use super::id_allocator::EntityKind;
use super::store::MemoryStore;

/// Enrollment repository backed by a shared [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryEnrollmentRepository {
    store: MemoryStore,
}

impl MemoryEnrollmentRepository {
    /// Create a repository over `store`.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EnrollmentRepository for MemoryEnrollmentRepository {
    async fn list_by_user(&self, user_id: UserId) -> Vec<Enrollment> {
        self.store
            .enrollments()
            .rows
            .values()
            .filter(|enrollment| enrollment.user_id() == user_id)
            .cloned()
            .collect()
    }

    async fn find(&self, user_id: UserId, course_id: CourseId) -> Option<Enrollment> {
        let enrollments = self.store.enrollments();
        enrollments
            .by_pair
            .get(&(user_id, course_id))
            .and_then(|id| enrollments.rows.get(*id))
            .cloned()
    }

    async fn find_by_id(&self, id: EnrollmentId) -> Option<Enrollment> {
        self.store.enrollments().rows.get(id).cloned()
    }

    async fn create(
        &self,
        enrollment: NewEnrollment,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let pair = (enrollment.user_id, enrollment.course_id);
        let mut enrollments = self.store.enrollments_mut();
        if enrollments.by_pair.contains_key(&pair) {
            return Err(EnrollmentRepositoryError::duplicate_enrollment(pair.0, pair.1));
        }
        let id = EnrollmentId::from(self.store.ids().next(EntityKind::Enrollment));
        let enrollment = Enrollment::from_new(id, enrollment);
        enrollments.by_pair.insert(pair, id);
        enrollments.rows.put(id, enrollment.clone());
        Ok(enrollment)
    }

    async fn update_progress(
        &self,
        id: EnrollmentId,
        update: ProgressUpdate,
    ) -> Result<Enrollment, EnrollmentRepositoryError> {
        let mut enrollments = self.store.enrollments_mut();
        let enrollment = enrollments
            .rows
            .get_mut(id)
            .ok_or_else(|| EnrollmentRepositoryError::not_found(id))?;
        enrollment.apply(update);
        Ok(enrollment.clone())
    }
}
