//! In-memory `CourseRepository` adapter.

use async_trait::async_trait;

use crate::domain::ports::CourseRepository;
use crate::domain::{CategoryFilter, Course, CourseId, NewCourse};

use super::id_allocator::EntityKind;
use super::store::MemoryStore;

/// Course repository backed by a shared [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryCourseRepository {
    store: MemoryStore,
}

impl MemoryCourseRepository {
    /// Create a repository over `store`.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CourseRepository for MemoryCourseRepository {
    async fn list_all(&self) -> Vec<Course> {
        self.store.courses().values().cloned().collect()
    }

    async fn find_by_id(&self, id: CourseId) -> Option<Course> {
        self.store.courses().get(id).cloned()
    }

    async fn list_by_category(&self, filter: &CategoryFilter) -> Vec<Course> {
        self.store
            .courses()
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect()
    }

    async fn create(&self, course: NewCourse) -> Course {
        let mut courses = self.store.courses_mut();
        let id = CourseId::from(self.store.ids().next(EntityKind::Course));
        let course = Course::from_new(id, course);
        courses.put(id, course.clone());
        course
    }
}
